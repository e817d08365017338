use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::validator::{missing_hint, SetupReport};

const NEXT_STEPS: &[&str] = &[
    "Run the support automation scripts from your repository root",
    "Re-run check-setup after changing your environment file",
    "Invoke your skill: /support",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Machine-readable result of a setup check or any other support script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub status: Status,
    pub message: String,
    pub details: Map<String, Value>,
}

#[derive(Serialize)]
struct ReportDetails<'a> {
    missing_required: &'a [String],
    missing_optional: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
}

fn details_map<D: Serialize>(details: &D) -> Result<Map<String, Value>> {
    match serde_json::to_value(details)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => anyhow::bail!("Outcome details must be a JSON object, got: {}", other),
    }
}

impl Outcome {
    /// A successful result. `details` must serialize to an object or null.
    pub fn success<D: Serialize>(message: impl Into<String>, details: &D) -> Result<Self> {
        Ok(Self {
            status: Status::Ok,
            message: message.into(),
            details: details_map(details)?,
        })
    }

    /// A failed result. `details` must serialize to an object or null.
    pub fn error<D: Serialize>(message: impl Into<String>, details: &D) -> Result<Self> {
        Ok(Self {
            status: Status::Error,
            message: message.into(),
            details: details_map(details)?,
        })
    }

    pub fn from_report(report: &SetupReport, env_file: &Path) -> Result<Self> {
        let mut details = ReportDetails {
            missing_required: &report.missing_required,
            missing_optional: &report.missing_optional,
            hint: None,
        };
        if report.is_ok() {
            Self::success("All required environment variables are set", &details)
        } else {
            details.hint = Some(missing_hint(env_file));
            Self::error("Missing required environment variables", &details)
        }
    }
}

/// Write `outcome` as pretty JSON, to `out` on success and `err` on failure.
pub fn write_outcome(outcome: &Outcome, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(outcome)?;
    match outcome.status {
        Status::Ok => {
            writeln!(out, "{}", json)?;
            out.flush()?;
        }
        Status::Error => {
            writeln!(err, "{}", json)?;
            err.flush()?;
        }
    }
    Ok(())
}

pub fn write_json(
    report: &SetupReport,
    env_file: &Path,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    write_outcome(&Outcome::from_report(report, env_file)?, out, err)
}

fn list(w: &mut impl Write, names: &[String]) -> std::io::Result<()> {
    for name in names {
        writeln!(w, "   - {}", name)?;
    }
    Ok(())
}

/// Write the human-readable report. Failures go to `err`, everything else to `out`.
pub fn write_text(
    report: &SetupReport,
    env_file: &Path,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    writeln!(out, "🔍 Checking environment setup...\n")?;

    if report.is_ok() {
        writeln!(out, "✅ All required environment variables are set")?;
    } else {
        writeln!(err, "❌ Missing required environment variables:")?;
        list(err, &report.missing_required)?;
        writeln!(err, "\n{}.", missing_hint(env_file))?;
    }

    if !report.missing_optional.is_empty() {
        writeln!(out, "\n⚠️  Optional environment variables not set:")?;
        list(out, &report.missing_optional)?;
        writeln!(out, "\nThese are optional but may be needed for some features.")?;
    }

    if report.is_ok() {
        writeln!(out, "\n✅ Setup complete! You're ready to use the support automation.\n")?;
        writeln!(out, "Next steps:")?;
        for (i, step) in NEXT_STEPS.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, step)?;
        }
        writeln!(out)?;
    } else {
        writeln!(
            err,
            "\n❌ Setup incomplete. Please add missing variables to {}\n",
            env_file.display()
        )?;
    }

    out.flush()?;
    err.flush()?;
    Ok(())
}
