use chrono::NaiveDate;

use crate::{core::services::ComparisonTarget, domain::JobOffer};

use super::CliError;

/// Positional arguments and flags following the command name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedArgs {
    pub positionals: Vec<String>,
    pub today: Option<NaiveDate>,
    pub templates: Vec<String>,
    pub jobs: Vec<ComparisonTarget>,
    pub months: bool,
    pub json: bool,
}

impl ParsedArgs {
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut parsed = ParsedArgs::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--today" => parsed.today = Some(parse_date(flag_value(&mut iter, arg)?)?),
                "--template" => parsed.templates.push(flag_value(&mut iter, arg)?.to_string()),
                "--job" => parsed.jobs.push(parse_job(flag_value(&mut iter, arg)?)?),
                "--months" => parsed.months = true,
                "--json" => parsed.json = true,
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown flag `{flag}`")))
                }
                _ => parsed.positionals.push(arg.clone()),
            }
        }
        Ok(parsed)
    }

    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }
}

fn flag_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str, CliError> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("`{flag}` expects a value")))
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::Usage(format!("`{value}` is not a YYYY-MM-DD date")))
}

/// `LABEL,SALARY,START[,RAISE_PCT]`
fn parse_job(spec: &str) -> Result<ComparisonTarget, CliError> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.len() < 3 || parts.len() > 4 {
        return Err(CliError::Usage(format!(
            "`{spec}` should look like LABEL,SALARY,START[,RAISE_PCT]"
        )));
    }
    let number = |raw: &str| {
        raw.parse::<f64>()
            .map_err(|_| CliError::Usage(format!("`{raw}` is not a number")))
    };
    let mut offer = JobOffer::new(number(parts[1])?, parse_date(parts[2])?);
    if let Some(raise) = parts.get(3) {
        offer = offer.with_annual_raise(number(raise)?);
    }
    Ok(ComparisonTarget::JobScenario {
        label: parts[0].to_string(),
        offer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parses_flags_and_positionals() {
        let parsed = ParsedArgs::parse(&strings(&[
            "plan.json",
            "--today",
            "2025-02-01",
            "--template",
            "lean",
            "--job",
            "Acme, 5200, 2025-04-01, 3",
            "--months",
        ]))
        .unwrap();
        assert_eq!(parsed.positional(0), Some("plan.json"));
        assert_eq!(parsed.today, NaiveDate::from_ymd_opt(2025, 2, 1));
        assert_eq!(parsed.templates, vec!["lean".to_string()]);
        assert!(parsed.months);
        assert!(!parsed.json);
        match &parsed.jobs[0] {
            ComparisonTarget::JobScenario { label, offer } => {
                assert_eq!(label, "Acme");
                assert_eq!(offer.salary, 5200.0);
                assert_eq!(offer.annual_raise_pct, 3.0);
            }
            other => panic!("unexpected target {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert!(ParsedArgs::parse(&strings(&["--today", "tomorrow"])).is_err());
        assert!(ParsedArgs::parse(&strings(&["--today"])).is_err());
        assert!(ParsedArgs::parse(&strings(&["--job", "Acme,lots,2025-01-01"])).is_err());
        assert!(ParsedArgs::parse(&strings(&["--verbose"])).is_err());
    }
}
