use serde::{Deserialize, Serialize};

/// Opening hours and slot size for a single day of bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessHours {
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_minutes: u32,
    #[serde(default)]
    pub breaks: Vec<BreakWindow>,
}

/// A declared exclusion window ("2025-09-20" from "12:00" to "13:00").
/// Parsed and validated here, but not yet consumed by slot generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakWindow {
    pub date: String,
    pub from: String,
    pub to: String,
}

impl BusinessHours {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.end_hour > 24 {
            anyhow::bail!("end hour out of range: {}", self.end_hour);
        }
        if self.slot_minutes == 0 {
            anyhow::bail!("slot minutes must be positive");
        }
        for brk in &self.breaks {
            parse_date(&brk.date)?;
            parse_time(&brk.from)?;
            parse_time(&brk.to)?;
        }
        Ok(())
    }

    pub fn breaks_from_json(s: &str) -> anyhow::Result<Vec<BreakWindow>> {
        let breaks: Vec<BreakWindow> = serde_json::from_str(s)?;
        for brk in &breaks {
            parse_date(&brk.date)?;
            parse_time(&brk.from)?;
            parse_time(&brk.to)?;
        }
        Ok(breaks)
    }
}

fn parse_date(s: &str) -> anyhow::Result<()> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| anyhow::anyhow!("invalid date: {s}"))
}

fn parse_time(s: &str) -> anyhow::Result<()> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err(anyhow::anyhow!("invalid time format: {s}"));
    }
    let hour: u32 = parts[0]
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid hour in: {s}"))?;
    let minute: u32 = parts[1]
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid minute in: {s}"))?;
    if hour > 23 || minute > 59 {
        return Err(anyhow::anyhow!("time out of range: {s}"));
    }
    Ok(())
}
