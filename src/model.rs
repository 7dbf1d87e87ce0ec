//! Domain types shared between the data provider, the store and the views.
//!
//! Field names follow the JSON contract of the remote generative service
//! (camelCase keys, Spanish enum labels), so everything the provider parses
//! lives here with its serde attributes.

use serde::Deserialize;

/// Approval state of a material in the external validation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ComplianceStatus {
    Validado,
    #[serde(rename = "En Revisión")]
    EnRevision,
    #[serde(rename = "No Conforme")]
    NoConforme,
}

impl ComplianceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Validado => "Validado",
            ComplianceStatus::EnRevision => "En Revisión",
            ComplianceStatus::NoConforme => "No Conforme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RiskLevel {
    Bajo,
    Medio,
    Alto,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Bajo => "Bajo",
            RiskLevel::Medio => "Medio",
            RiskLevel::Alto => "Alto",
        }
    }
}

/// A stocked inventory item identified by SKU.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub sku: String,
    pub description: String,
    pub stock: u32,
    pub location: String,
    pub compliance_status: ComplianceStatus,
    pub risk_level: RiskLevel,
}

/// A candidate replacement material with a compatibility score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Substitute {
    #[serde(flatten)]
    pub material: Material,
    /// Score from 0 to 100.
    pub compatibility: u8,
    /// Technical reason for the substitution.
    pub justification: String,
}

/// Original material plus its candidate substitutes, as returned by the
/// substitution engine. Ephemeral: only the matrix view holds one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubstitutionResult {
    pub original: Material,
    pub substitutes: Vec<Substitute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionStatus {
    /// Awaiting validation in the external catalog (Sphera).
    Pendiente,
    Aprobado,
    Rechazado,
}

impl SuggestionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionStatus::Pendiente => "Pendiente de Validación en Sphera",
            SuggestionStatus::Aprobado => "Aprobado",
            SuggestionStatus::Rechazado => "Rechazado",
        }
    }

    /// Aprobado and Rechazado are terminal: once reached, immutable.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SuggestionStatus::Pendiente)
    }
}

/// A user-submitted proposal to treat one material as interchangeable with
/// another, pending external validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub id: u64,
    pub original_sku: String,
    pub substitute_sku: String,
    pub justification: String,
    pub status: SuggestionStatus,
    pub submitted_by: String,
}

/// The single drafted purchase request. Overwritten each time a purchase
/// flow starts.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRequest {
    pub sku: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Obsolescence,
    Overstock,
    LowStock,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::Obsolescence => "Obsolescencia",
            AlertKind::Overstock => "Sobrestock",
            AlertKind::LowStock => "Bajo Stock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// An inventory alert produced by the remote service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub material_sku: String,
    pub message: String,
    /// ISO 8601 date, displayed as-is.
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Increase,
    Decrease,
}

/// One dashboard indicator tile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub change: String,
    pub change_type: ChangeType,
}

/// One bar of the inventory-rotation chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryDatum {
    pub name: String,
    pub value: u64,
}

/// Everything the dashboard view fetches in one call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardData {
    pub kpis: Vec<Kpi>,
    #[serde(rename = "inventoryData")]
    pub rotation: Vec<CategoryDatum>,
}

/// A stock-consolidation proposal from the optimization report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationSuggestion {
    pub from_sku: String,
    pub to_sku: String,
    pub location: String,
    pub justification: String,
}

/// Wire envelope of the consolidation report reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsolidationReport {
    pub suggestions: Vec<ConsolidationSuggestion>,
}
