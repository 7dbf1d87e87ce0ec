//! Topic-specific request functions.
//!
//! One function per screen, each pairing a Spanish prompt with the JSON
//! shape the reply must satisfy. Identical inputs always trigger a fresh
//! remote call; nothing here is cached.

use serde_json::{json, Value};

use crate::model::{
    Alert, ConsolidationReport, ConsolidationSuggestion, DashboardData, Material,
    SubstitutionResult,
};
use crate::provider::client::{GenerateRequest, GenerativeClient};
use crate::provider::error::ProviderError;
use crate::provider::fence::parse_fenced_json;
use crate::provider::normalize::renumber_skus;

const INITIAL_INVENTORY_PROMPT: &str = "Genera una lista de inventario inicial de 15 a 20 materiales para Tecpetrol (empresa de oil & gas). La lista debe ser variada. Es crucial que incluyas:\n- 2 o 3 materiales con stock CERO (0).\n- 3 o 4 materiales con stock BAJO (entre 1 y 10).\n- El resto con stock saludable (mayor a 50).\n- Asigna un 'complianceStatus' a cada uno: la mayoría 'Validado', pero 2-3 como 'En Revisión' y 1 como 'No Conforme'.\n- Asigna un 'riskLevel' a cada uno ('Bajo', 'Medio', 'Alto'), acorde al tipo de material.\nPara cada material, proporciona un SKU temporal (ej: TEMP-01), descripción técnica, stock, ubicación, estado de cumplimiento y nivel de riesgo. La respuesta debe ser en español.";

const TECHNICAL_SHEET_PROMPT: &str = "Eres un experto catalogador de Tecpetrol. Genera **únicamente** la ficha técnica para el material: \"{material}\".\n\n**REGLAS ESTRICTAS:**\n1.  **NO** escribas frases introductorias como \"Aquí tienes la ficha...\" o \"Claro, aquí está...\".\n2.  Tu respuesta debe empezar directamente con la descripción técnica.\n3.  Usa formato Markdown simple para la estructura:\n    - Usa **doble asterisco** para los títulos y subtítulos (ej: **Dimensiones**).\n    - Usa un asterisco (*) seguido de un espacio para las listas de especificaciones.\n\n**EJEMPLO DE FORMATO:**\n**DESCRIPCIÓN TÉCNICA DE MATERIAL: CARCASA DE POZO (CASING)**\n**Identificación del Material:**\n* **Tipo:** Carcasa de Pozo (Casing)\n* **Diámetro Nominal Exterior (OD):** 9-5/8 pulgadas (244.48 mm)\n\nTu respuesta debe ser solo la ficha en español.";

const FIND_SUBSTITUTES_PROMPT: &str = "Actúa como el \"Motor de Sustitución\" para Tecpetrol. Dado el material \"{material}\", identifícalo y encuentra de 3 a 5 sustitutos potenciales de un inventario ficticio. Proporciona una justificación técnica y una puntuación de compatibilidad para cada sustituto. Tanto el material original como los sustitutos deben tener datos ficticios de stock, ubicación, estado de cumplimiento (la mayoría 'Validado') y nivel de riesgo. La respuesta completa debe estar en español.";

const DASHBOARD_PROMPT: &str = "Genera datos de panel para el sistema \"Materiales Sustitutos\" de Tecpetrol. Necesito 4 KPIs en español que reflejen los objetivos del proyecto: 'Reducción de Sobre-stock (Valor)', 'Cobertura de Faltantes con Sustitutos', 'Rotación de Inventario Mejorada', y 'Ahorro por Sustitución'. Los valores deben ser realistas para una empresa de oil & gas. Además, proporciona de 5 a 7 puntos de datos para un gráfico de barras de rotación de inventario por categoría de material. Toda la respuesta debe estar en español.";

const ALERTS_PROMPT: &str = "Genera 5 alertas de inventario realistas en español para una empresa de petróleo y gas. Incluye alertas de obsolescencia potencial (sin movimiento en >1 año), sobrestock de un material donde existe un sustituto y bajo stock de un componente crítico. Usa códigos SKU ficticios pero realistas. La respuesta completa debe estar en español.";

const CONSOLIDATION_PROMPT: &str = "Actúa como un sistema de optimización de inventario para Tecpetrol. Genera 3 a 5 sugerencias de consolidación de stock. Cada sugerencia debe proponer unificar el stock de un material (fromSku) en otro material sustituto (toSku) en un centro logístico específico. Proporciona una justificación basada en baja rotación, costos, o exceso de stock. La respuesta debe estar en español.";

fn material_properties() -> Value {
    json!({
        "sku": { "type": "STRING" },
        "description": { "type": "STRING" },
        "stock": { "type": "INTEGER" },
        "location": { "type": "STRING" },
        "complianceStatus": { "type": "STRING", "enum": ["Validado", "En Revisión", "No Conforme"] },
        "riskLevel": { "type": "STRING", "enum": ["Bajo", "Medio", "Alto"] },
    })
}

const MATERIAL_REQUIRED: [&str; 6] = [
    "sku",
    "description",
    "stock",
    "location",
    "complianceStatus",
    "riskLevel",
];

fn material_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": material_properties(),
        "required": MATERIAL_REQUIRED,
    })
}

fn substitute_schema() -> Value {
    let mut properties = material_properties();
    let map = properties
        .as_object_mut()
        .expect("material properties is an object");
    map.insert(
        "compatibility".to_string(),
        json!({ "type": "INTEGER", "description": "A score from 0-100" }),
    );
    map.insert(
        "justification".to_string(),
        json!({ "type": "STRING", "description": "Technical reason for substitution" }),
    );
    let mut required: Vec<&str> = MATERIAL_REQUIRED.to_vec();
    required.extend(["compatibility", "justification"]);
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

impl GenerativeClient {
    /// Generate the startup inventory, then sort and renumber it.
    pub async fn initial_inventory(&self) -> Result<Vec<Material>, ProviderError> {
        let schema = json!({
            "type": "ARRAY",
            "items": material_schema(),
        });
        let text = self
            .generate(&GenerateRequest::json(INITIAL_INVENTORY_PROMPT, schema))
            .await?;
        let inventory: Vec<Material> = parse_fenced_json(&text)?;
        Ok(renumber_skus(inventory))
    }

    /// Ask the substitution engine for candidates for one material.
    pub async fn find_substitutes(
        &self,
        description: &str,
    ) -> Result<SubstitutionResult, ProviderError> {
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "original": material_schema(),
                "substitutes": {
                    "type": "ARRAY",
                    "items": substitute_schema(),
                },
            },
            "required": ["original", "substitutes"],
        });
        let prompt = FIND_SUBSTITUTES_PROMPT.replace("{material}", description);
        let text = self
            .generate(&GenerateRequest::json(prompt, schema).with_temperature(0.5))
            .await?;
        parse_fenced_json(&text)
    }

    /// Fetch the free-text technical data sheet for a material.
    pub async fn technical_sheet(&self, description: &str) -> Result<String, ProviderError> {
        let prompt = TECHNICAL_SHEET_PROMPT.replace("{material}", description);
        self.generate(&GenerateRequest::text(prompt).with_temperature(0.2))
            .await
    }

    /// Fetch KPI tiles and the rotation chart series.
    pub async fn dashboard_data(&self) -> Result<DashboardData, ProviderError> {
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "kpis": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "label": { "type": "STRING" },
                            "value": { "type": "STRING" },
                            "change": { "type": "STRING" },
                            "changeType": { "type": "STRING", "enum": ["increase", "decrease"] },
                        },
                        "required": ["label", "value", "change", "changeType"],
                    },
                },
                "inventoryData": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": { "type": "STRING" },
                            "value": { "type": "INTEGER" },
                        },
                        "required": ["name", "value"],
                    },
                },
            },
            "required": ["kpis", "inventoryData"],
        });
        let text = self
            .generate(&GenerateRequest::json(DASHBOARD_PROMPT, schema))
            .await?;
        parse_fenced_json(&text)
    }

    /// Fetch the current inventory alerts.
    pub async fn alerts(&self) -> Result<Vec<Alert>, ProviderError> {
        let schema = json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "id": { "type": "STRING" },
                    "type": { "type": "STRING", "enum": ["OBSOLESCENCE", "OVERSTOCK", "LOW_STOCK"] },
                    "severity": { "type": "STRING", "enum": ["high", "medium", "low"] },
                    "materialSku": { "type": "STRING" },
                    "message": { "type": "STRING" },
                    "timestamp": { "type": "STRING", "description": "ISO 8601 date format" },
                },
                "required": ["id", "type", "severity", "materialSku", "message", "timestamp"],
            },
        });
        let text = self.generate(&GenerateRequest::json(ALERTS_PROMPT, schema)).await?;
        parse_fenced_json(&text)
    }

    /// Fetch the stock-consolidation report rows.
    pub async fn consolidation_report(
        &self,
    ) -> Result<Vec<ConsolidationSuggestion>, ProviderError> {
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "suggestions": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "fromSku": { "type": "STRING" },
                            "toSku": { "type": "STRING" },
                            "location": { "type": "STRING" },
                            "justification": { "type": "STRING" },
                        },
                        "required": ["fromSku", "toSku", "location", "justification"],
                    },
                },
            },
            "required": ["suggestions"],
        });
        let text = self
            .generate(&GenerateRequest::json(CONSOLIDATION_PROMPT, schema))
            .await?;
        let report: ConsolidationReport = parse_fenced_json(&text)?;
        Ok(report.suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_schema_extends_material_schema() {
        let schema = substitute_schema();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("sku"));
        assert!(properties.contains_key("compatibility"));
        assert!(properties.contains_key("justification"));
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 8);
    }

    #[test]
    fn prompts_interpolate_the_material() {
        let prompt = FIND_SUBSTITUTES_PROMPT.replace("{material}", "tubo de acero");
        assert!(prompt.contains("\"tubo de acero\""));
        assert!(!prompt.contains("{material}"));
    }
}
