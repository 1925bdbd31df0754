//! Jackpot stats models for the EGT stats feed

use serde::Deserialize;

/// Top-level payload of `GET /api/jackpot/stats`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JackpotStats {
    #[serde(default)]
    pub jackpot_instances_stats: Option<JackpotInstancesStats>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JackpotInstancesStats {
    #[serde(default = "Vec::new")]
    pub instance_stats: Vec<InstanceStats>,
}

/// One jackpot instance ("Bell Link", "High Cash", ...)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceStats {
    pub instance_name: String,
    #[serde(default = "Vec::new")]
    pub level_stats: Vec<LevelStats>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStats {
    pub level_id: u32,
    #[serde(default = "Vec::new")]
    pub current_value: Vec<CurrencyValue>,
}

/// Per-currency jackpot value, in minor units (tetri for GEL)
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyValue {
    pub key: String,
    pub value: f64,
}

impl JackpotStats {
    /// Level-1 value of the named instance in the given currency.
    /// This is the only slice the overlays display.
    pub fn level1_value(&self, instance_name: &str, currency: &str) -> Option<f64> {
        let instances = &self.jackpot_instances_stats.as_ref()?.instance_stats;
        let instance = instances
            .iter()
            .find(|i| i.instance_name == instance_name)?;
        let level1 = instance.level_stats.iter().find(|l| l.level_id == 1)?;
        let value = level1.current_value.iter().find(|v| v.key == currency)?;
        Some(value.value)
    }
}
