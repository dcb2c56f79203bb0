//! Typed command options and their validators.
//!
//! Options arrive from the host as `name=value` pairs plus a trailing field
//! list. Every value is validated before a single record is processed.

use std::sync::LazyLock;

use hyperbaseline_core::config::ConfigOverrides;
use hyperbaseline_core::errors::ConfigError;
use hyperbaseline_core::types::OutlierMethod;
use regex::Regex;

static FIELDNAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[_.a-zA-Z-][_.a-zA-Z0-9-]*$").ok());

fn invalid(option: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: option.to_string(),
        message,
    }
}

/// Parse a float option.
pub fn parse_float(option: &str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| invalid(option, format!("Cannot convert value to float: {raw}")))
}

/// Parse a boolean option. Accepts `1/0`, `t/f`, `true/false`, `y/n`,
/// `yes/no`, case-insensitively.
pub fn parse_boolean(option: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" => Ok(true),
        "0" | "f" | "false" | "n" | "no" => Ok(false),
        _ => Err(invalid(option, format!("Expected a boolean value, not {raw:?}"))),
    }
}

/// Validate a field name.
pub fn parse_fieldname(option: &str, raw: &str) -> Result<String, ConfigError> {
    let matches = FIELDNAME.as_ref().is_some_and(|re| re.is_match(raw));
    if matches {
        Ok(raw.to_string())
    } else {
        Err(invalid(option, format!("Illegal characters in fieldname: {raw}")))
    }
}

/// Parse an outlier method. Names are case-sensitive.
pub fn parse_method(raw: &str) -> Result<OutlierMethod, ConfigError> {
    raw.parse()
}

fn required(name: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| ConfigError::MissingOption {
        name: name.to_string(),
    })
}

fn parse_fieldnames<'a, I>(fieldnames: I) -> Result<Vec<String>, ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    fieldnames
        .into_iter()
        .map(|f| parse_fieldname("fieldnames", f))
        .collect()
}

/// Options of `fill_baseline`.
#[derive(Debug, Clone, PartialEq)]
pub struct FillBaselineOptions {
    /// Prefix of every baseline key written by the run.
    pub config_name: String,
    /// Group-by field.
    pub value: String,
    /// Destination collection. Falls back to `store.collection`.
    pub kv_store: Option<String>,
    /// Fields to aggregate, in output order. Empty means every field except
    /// the group-by field and `_`-prefixed ones.
    pub fieldnames: Vec<String>,
}

impl FillBaselineOptions {
    pub fn new(config_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            config_name: config_name.into(),
            value: value.into(),
            kv_store: None,
            fieldnames: Vec::new(),
        }
    }

    pub fn from_args<'a, A, F>(args: A, fieldnames: F) -> Result<Self, ConfigError>
    where
        A: IntoIterator<Item = (&'a str, &'a str)>,
        F: IntoIterator<Item = &'a str>,
    {
        let mut config_name = None;
        let mut value = None;
        let mut kv_store = None;
        for (name, raw) in args {
            match name {
                "config_name" => config_name = Some(raw.to_string()),
                "value" => value = Some(parse_fieldname(name, raw)?),
                "kv_store" => kv_store = Some(raw.to_string()),
                _ => return Err(invalid(name, "Unrecognized option".to_string())),
            }
        }
        Ok(Self {
            config_name: required("config_name", config_name)?,
            value: required("value", value)?,
            kv_store,
            fieldnames: parse_fieldnames(fieldnames)?,
        })
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            collection: self.kv_store.clone(),
            ..ConfigOverrides::default()
        }
    }
}

/// Options of `compare_to_baseline`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareToBaselineOptions {
    pub config_name: String,
    /// Group-by field whose value selects the baseline.
    pub value: String,
    pub kv_store: Option<String>,
    /// Overrides `scoring.threshold`.
    pub threshold: Option<f64>,
    /// Overrides `scoring.method`.
    pub method: Option<OutlierMethod>,
    /// Overrides `scoring.debug`.
    pub debug: Option<bool>,
    /// Fields to score. Must not be empty.
    pub fieldnames: Vec<String>,
}

impl CompareToBaselineOptions {
    pub fn new<I, S>(config_name: impl Into<String>, value: impl Into<String>, fieldnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config_name: config_name.into(),
            value: value.into(),
            kv_store: None,
            threshold: None,
            method: None,
            debug: None,
            fieldnames: fieldnames.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_args<'a, A, F>(args: A, fieldnames: F) -> Result<Self, ConfigError>
    where
        A: IntoIterator<Item = (&'a str, &'a str)>,
        F: IntoIterator<Item = &'a str>,
    {
        let mut config_name = None;
        let mut value = None;
        let mut options = Self::new(String::new(), String::new(), Vec::<String>::new());
        for (name, raw) in args {
            match name {
                "config_name" => config_name = Some(raw.to_string()),
                "value" => value = Some(parse_fieldname(name, raw)?),
                "kv_store" => options.kv_store = Some(raw.to_string()),
                "threshold" => options.threshold = Some(parse_float(name, raw)?),
                "method" => options.method = Some(parse_method(raw)?),
                "debug" => options.debug = Some(parse_boolean(name, raw)?),
                _ => return Err(invalid(name, "Unrecognized option".to_string())),
            }
        }
        options.config_name = required("config_name", config_name)?;
        options.value = required("value", value)?;
        options.fieldnames = parse_fieldnames(fieldnames)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fieldnames.is_empty() {
            return Err(ConfigError::MissingOption {
                name: "fieldnames".to_string(),
            });
        }
        if let Some(t) = self.threshold {
            if !t.is_finite() || t < 0.0 {
                return Err(invalid("threshold", format!("must be a finite, non-negative number, not {t}")));
            }
        }
        Ok(())
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            collection: self.kv_store.clone(),
            method: self.method.map(|m| m.name().to_string()),
            threshold: self.threshold,
            debug: self.debug,
            ..ConfigOverrides::default()
        }
    }
}
