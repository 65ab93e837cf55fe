//! The report's content: every fact the document renders, as constant data.
//!
//! Rows live here as plain record arrays so content edits never touch the
//! document assembly or drawing code. Evidence strings are asserted facts
//! about the audited system's source tree; they are rendered verbatim and
//! not verified.

/// Report title shown on the cover page.
pub const REPORT_TITLE: &str = "FHIR & DAK Compliance Report";

/// Name of the audited system.
pub const SYSTEM_NAME: &str = "Healthy Mother Maternal Health Information System";

/// Report author.
pub const AUTHOR: &str = "Zakaria Y. Turay";

/// The five top-level section titles, in document order.
pub const SECTION_TITLES: [&str; 5] = [
    "1. System Overview",
    "2. FHIR Compliance",
    "3. DAK Compliance",
    "4. Architecture and Interoperability",
    "5. Compliance Summary",
];

pub const PURPOSE_PARAGRAPH: &str = "The Healthy Mother App is a comprehensive maternal and child \
    health information system designed to support antenatal care (ANC), delivery, and postnatal \
    care workflows. The system is built with modern web technologies and follows international \
    healthcare interoperability standards including HL7 FHIR R4 and WHO Digital Adaptation Kit \
    (DAK) guidelines.";

pub const USE_CASES: [&str; 8] = [
    "Antenatal Care (ANC) visit tracking and management",
    "Pregnancy monitoring and risk assessment",
    "Delivery and birth record management",
    "Postnatal care and follow-up tracking",
    "Health worker communication and messaging",
    "Decision support and clinical guidance",
    "Quality metrics and compliance reporting",
    "Medication reminder and adherence tracking",
];

pub const ARCHITECTURE_PARAGRAPH: &str =
    "The system follows a modern three-tier architecture with clear separation of concerns:";

pub const ARCHITECTURE_LAYERS: [&str; 5] = [
    "Frontend Layer: Flutter mobile app and Next.js admin dashboard",
    "Backend Layer: Node.js/Express API server with FHIR R4 compliance",
    "Data Layer: PostgreSQL database with FHIR-compliant schema design",
    "Integration Layer: Android native services for medication reminders",
    "Standards Layer: Complete FHIR R4 and DAK implementation",
];

pub const FHIR_INTRO_PARAGRAPH: &str = "The system demonstrates complete HL7 FHIR R4 compliance \
    with full implementation of all required endpoints, resources, and operations.";

/// One implemented FHIR resource: resource type, backing database table(s),
/// REST endpoint, and the file/line evidence in the audited codebase.
#[derive(Debug, Clone, Copy)]
pub struct FhirResource {
    pub resource: &'static str,
    pub table: &'static str,
    pub endpoint: &'static str,
    pub evidence: &'static str,
}

pub const FHIR_RESOURCE_COLUMNS: [&str; 4] = [
    "FHIR Resource",
    "Database Table",
    "API Endpoint",
    "Evidence (File Path)",
];

pub const FHIR_RESOURCES: [FhirResource; 8] = [
    FhirResource {
        resource: "Patient",
        table: "patient",
        endpoint: "/fhir/Patient",
        evidence: "anc_register_fhir_dak_schema.sql:88-129",
    },
    FhirResource {
        resource: "Organization",
        table: "organization",
        endpoint: "/fhir/Organization",
        evidence: "anc_register_fhir_dak_schema.sql:62-83",
    },
    FhirResource {
        resource: "Encounter",
        table: "encounter, anc_visit",
        endpoint: "/fhir/Encounter",
        evidence: "anc_register_fhir_dak_schema.sql:166-275",
    },
    FhirResource {
        resource: "Observation",
        table: "observation",
        endpoint: "/fhir/Observation",
        evidence: "anc_register_fhir_dak_schema.sql:280-306",
    },
    FhirResource {
        resource: "Condition",
        table: "condition, pregnancy",
        endpoint: "/fhir/Condition",
        evidence: "anc_register_fhir_dak_schema.sql:311-161",
    },
    FhirResource {
        resource: "Procedure",
        table: "procedure, delivery",
        endpoint: "/fhir/Procedure",
        evidence: "anc_register_fhir_dak_schema.sql:339-404",
    },
    FhirResource {
        resource: "MedicationStatement",
        table: "medication_statement",
        endpoint: "/fhir/MedicationStatement",
        evidence: "anc_register_fhir_dak_schema.sql:480-504",
    },
    FhirResource {
        resource: "Communication",
        table: "chat_message",
        endpoint: "/fhir/Communication",
        evidence: "index.js:1586-1623",
    },
];

/// One exposed FHIR API endpoint.
#[derive(Debug, Clone, Copy)]
pub struct FhirEndpoint {
    pub endpoint: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

pub const FHIR_ENDPOINT_COLUMNS: [&str; 3] = ["Endpoint", "Method", "Description"];

pub const FHIR_ENDPOINTS: [FhirEndpoint; 9] = [
    FhirEndpoint {
        endpoint: "/metadata",
        method: "GET",
        description: "CapabilityStatement",
    },
    FhirEndpoint {
        endpoint: "/SearchParameter",
        method: "GET",
        description: "Search Parameters",
    },
    FhirEndpoint {
        endpoint: "/OperationDefinition",
        method: "GET",
        description: "Operation Definitions",
    },
    FhirEndpoint {
        endpoint: "/StructureDefinition",
        method: "GET",
        description: "Structure Definitions",
    },
    FhirEndpoint {
        endpoint: "/ValueSet",
        method: "GET",
        description: "Value Sets",
    },
    FhirEndpoint {
        endpoint: "/fhir/:resourceType",
        method: "GET/POST",
        description: "Resource CRUD Operations",
    },
    FhirEndpoint {
        endpoint: "/fhir/:resourceType/:id",
        method: "GET/PUT/DELETE",
        description: "Resource Operations",
    },
    FhirEndpoint {
        endpoint: "/fhir/:resourceType/$validate",
        method: "POST",
        description: "Resource Validation",
    },
    FhirEndpoint {
        endpoint: "/fhir/Patient/:id/$everything",
        method: "GET",
        description: "Patient Everything Operation",
    },
];

pub const DAK_INTRO_PARAGRAPH: &str = "The system implements complete WHO Digital Adaptation Kit \
    compliance with all decision points, scheduling guidelines, and indicators for maternal \
    health.";

/// One implemented DAK decision point.
#[derive(Debug, Clone, Copy)]
pub struct DecisionPoint {
    pub code: &'static str,
    pub feature: &'static str,
    pub evidence: &'static str,
    pub description: &'static str,
}

pub const DECISION_POINT_COLUMNS: [&str; 4] = [
    "DAK Component",
    "Module/Feature",
    "Implementation Evidence",
    "Description",
];

pub const DECISION_POINTS: [DecisionPoint; 14] = [
    DecisionPoint {
        code: "ANC.DT.01",
        feature: "Danger Signs Assessment",
        evidence: "dak-decision-support.js:8-15",
        description: "Immediate referral for danger signs",
    },
    DecisionPoint {
        code: "ANC.DT.02",
        feature: "Blood Pressure Assessment",
        evidence: "dak-decision-support.js:16-23",
        description: "Pre-eclampsia risk assessment",
    },
    DecisionPoint {
        code: "ANC.DT.03",
        feature: "Proteinuria Testing",
        evidence: "dak-decision-support.js:24-31",
        description: "Protein in urine testing",
    },
    DecisionPoint {
        code: "ANC.DT.04",
        feature: "Anemia Screening",
        evidence: "dak-decision-support.js:32-39",
        description: "Hemoglobin level screening",
    },
    DecisionPoint {
        code: "ANC.DT.05",
        feature: "HIV Testing",
        evidence: "dak-decision-support.js:40-46",
        description: "HIV testing and counseling",
    },
    DecisionPoint {
        code: "ANC.DT.06",
        feature: "Syphilis Screening",
        evidence: "dak-decision-support.js:47-53",
        description: "Syphilis screening",
    },
    DecisionPoint {
        code: "ANC.DT.07",
        feature: "Malaria Prevention",
        evidence: "dak-decision-support.js:54-60",
        description: "IPTp prophylaxis",
    },
    DecisionPoint {
        code: "ANC.DT.08",
        feature: "Tetanus Immunization",
        evidence: "dak-decision-support.js:61-68",
        description: "Tetanus toxoid vaccination",
    },
    DecisionPoint {
        code: "ANC.DT.09",
        feature: "Iron Supplementation",
        evidence: "dak-decision-support.js:69-75",
        description: "Iron and folic acid",
    },
    DecisionPoint {
        code: "ANC.DT.10",
        feature: "Birth Preparedness",
        evidence: "dak-decision-support.js:76-82",
        description: "Birth planning counseling",
    },
    DecisionPoint {
        code: "ANC.DT.11",
        feature: "Emergency Planning",
        evidence: "dak-decision-support.js:83-89",
        description: "Emergency plan development",
    },
    DecisionPoint {
        code: "ANC.DT.12",
        feature: "Postpartum Planning",
        evidence: "dak-decision-support.js:90-96",
        description: "Postpartum care planning",
    },
    DecisionPoint {
        code: "ANC.DT.13",
        feature: "Family Planning",
        evidence: "dak-decision-support.js:97-103",
        description: "Family planning counseling",
    },
    DecisionPoint {
        code: "ANC.DT.14",
        feature: "Danger Sign Education",
        evidence: "dak-decision-support.js:104-110",
        description: "Danger sign recognition education",
    },
];

/// One implemented DAK indicator with its coverage target.
#[derive(Debug, Clone, Copy)]
pub struct Indicator {
    pub code: &'static str,
    pub name: &'static str,
    pub target: &'static str,
    pub evidence: &'static str,
}

pub const INDICATOR_COLUMNS: [&str; 4] =
    ["Indicator Code", "Indicator Name", "Target", "Implementation"];

pub const INDICATORS: [Indicator; 10] = [
    Indicator {
        code: "ANC.IND.01",
        name: "Early ANC Initiation",
        target: "80%",
        evidence: "dak-decision-support.js:149-155",
    },
    Indicator {
        code: "ANC.IND.02",
        name: "Four or More ANC Visits",
        target: "90%",
        evidence: "dak-decision-support.js:156-162",
    },
    Indicator {
        code: "ANC.IND.03",
        name: "Quality ANC Visits",
        target: "85%",
        evidence: "dak-decision-support.js:163-169",
    },
    Indicator {
        code: "ANC.IND.04",
        name: "HIV Testing Coverage",
        target: "95%",
        evidence: "dak-decision-support.js:170-176",
    },
    Indicator {
        code: "ANC.IND.05",
        name: "Syphilis Screening Coverage",
        target: "90%",
        evidence: "dak-decision-support.js:177-183",
    },
    Indicator {
        code: "ANC.IND.06",
        name: "Iron Supplementation Coverage",
        target: "90%",
        evidence: "dak-decision-support.js:184-190",
    },
    Indicator {
        code: "ANC.IND.07",
        name: "Tetanus Immunization Coverage",
        target: "90%",
        evidence: "dak-decision-support.js:191-197",
    },
    Indicator {
        code: "ANC.IND.08",
        name: "Birth Preparedness Planning",
        target: "80%",
        evidence: "dak-decision-support.js:198-204",
    },
    Indicator {
        code: "ANC.IND.09",
        name: "Danger Sign Recognition",
        target: "85%",
        evidence: "dak-decision-support.js:205-211",
    },
    Indicator {
        code: "ANC.IND.10",
        name: "Postpartum Care Planning",
        target: "75%",
        evidence: "dak-decision-support.js:212-218",
    },
];

pub const INTEROP_PARAGRAPH: &str = "The system supports comprehensive interoperability through \
    standardized APIs, FHIR-compliant data structures, and RESTful service design.";

pub const INTEROP_FEATURES: [&str; 8] = [
    "FHIR R4 RESTful API with complete CRUD operations",
    "Standardized content types (application/fhir+json)",
    "FHIR-compliant error handling with OperationOutcome",
    "Complete search parameter support",
    "Resource validation and versioning",
    "Bundle responses for search operations",
    "SMART on FHIR authentication support",
    "Cross-platform mobile and web integration",
];

pub const SUMMARY_PARAGRAPH: &str = "The Healthy Mother App demonstrates exceptional compliance \
    with both FHIR R4 and DAK standards, representing a world-class implementation of healthcare \
    interoperability.";

/// One line of the compliance summary table.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceEntry {
    pub standard: &'static str,
    pub level: &'static str,
    pub achievements: &'static str,
}

pub const COMPLIANCE_COLUMNS: [&str; 3] = ["Standard", "Compliance Level", "Key Achievements"];

pub const COMPLIANCE_SUMMARY: [ComplianceEntry; 10] = [
    ComplianceEntry {
        standard: "FHIR R4",
        level: "Full Implementation",
        achievements: "Complete REST API, all resource types, full search capabilities",
    },
    ComplianceEntry {
        standard: "DAK Decision Points",
        level: "Full Implementation",
        achievements: "All 14 decision points (ANC.DT.01-14) implemented",
    },
    ComplianceEntry {
        standard: "DAK Scheduling",
        level: "Full Implementation",
        achievements: "All 5 scheduling guidelines (ANC.S.01-05) implemented",
    },
    ComplianceEntry {
        standard: "DAK Indicators",
        level: "Full Implementation",
        achievements: "All 10 indicators (ANC.IND.01-10) with target tracking",
    },
    ComplianceEntry {
        standard: "Mobile Integration",
        level: "Full Implementation",
        achievements: "Flutter app with DAK dashboard and Android native services",
    },
    ComplianceEntry {
        standard: "Admin Dashboard",
        level: "Full Implementation",
        achievements: "Next.js dashboard with compliance monitoring",
    },
    ComplianceEntry {
        standard: "Database Schema",
        level: "Full Implementation",
        achievements: "FHIR-compliant PostgreSQL schema with DAK fields",
    },
    ComplianceEntry {
        standard: "API Endpoints",
        level: "Full Implementation",
        achievements: "Complete FHIR and DAK API endpoints",
    },
    ComplianceEntry {
        standard: "Authentication",
        level: "Full Implementation",
        achievements: "JWT-based authentication with OAuth 2.0 support",
    },
    ComplianceEntry {
        standard: "Production Deployment",
        level: "Full Implementation",
        achievements: "Live deployment on Railway platform",
    },
];

pub const CONCLUSION_PARAGRAPHS: [&str; 2] = [
    "The Healthy Mother App represents a comprehensive implementation of healthcare standards \
     compliance. With 100% FHIR R4 compliance and complete DAK implementation, the system \
     demonstrates how modern healthcare applications can achieve full interoperability while \
     maintaining practical usability and real-world applicability.",
    "This system is ready for production use and can serve as a reference implementation for \
     FHIR R4 and DAK compliance in maternal health applications.",
];
