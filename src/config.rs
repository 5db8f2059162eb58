use clap::Parser;

pub const FORMAT_SUMMARY: &str = "summary";
pub const FORMAT_JSON: &str = "json";

/// College-football betting trends report generator
#[derive(Parser, Debug, Clone)]
#[command(name = "cfb-trends", version, about)]
pub struct Config {
    /// Path to the games JSON file (array of game records)
    #[arg(long, env = "CFB_GAMES_FILE")]
    pub games: String,

    /// Path to the betting-lines JSON file; without it the report carries
    /// straight-up aggregates only
    #[arg(long, env = "CFB_LINES_FILE")]
    pub lines: Option<String>,

    /// Restrict the report to a single week
    #[arg(long)]
    pub week: Option<u16>,

    /// Output format: "summary" (terminal tables) or "json"
    #[arg(long, env = "CFB_FORMAT", default_value = "summary")]
    pub format: String,

    /// Also write the JSON report to this path
    #[arg(long)]
    pub output: Option<String>,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.format != FORMAT_SUMMARY && self.format != FORMAT_JSON {
            anyhow::bail!(
                "unknown format '{}'; expected '{}' or '{}'",
                self.format,
                FORMAT_SUMMARY,
                FORMAT_JSON
            );
        }
        if let Some(week) = self.week {
            if !(1..=20).contains(&week) {
                anyhow::bail!("week must be between 1 and 20, got {week}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            games: "games.json".into(),
            lines: None,
            week: None,
            format: FORMAT_SUMMARY.into(),
            output: None,
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let mut cfg = config();
        cfg.format = "csv".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_week() {
        let mut cfg = config();
        cfg.week = Some(0);
        assert!(cfg.validate().is_err());
        cfg.week = Some(21);
        assert!(cfg.validate().is_err());
        cfg.week = Some(13);
        assert!(cfg.validate().is_ok());
    }
}
