use super::*;

impl Config {
    /// Get a typed value using dot notation.
    ///
    /// The first segment names a top-level entry, later segments name struct
    /// fields or array positions (`servers.0.host`).
    ///
    /// # Examples
    /// ```no_run
    /// # use cfgml::Config;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = Config::from_file("app.cfg")?;
    /// let name: String = config.get("user.name")?;
    /// let port: u16 = config.get("port")?;
    /// let hobbies: Vec<String> = config.get("user.hobbies")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, CfgError>
    where
        T: TryFrom<Value, Error = CfgError>,
    {
        let value = self.get_value(path)?.clone();
        T::try_from(value).map_err(|e| with_path(e, path))
    }

    /// Like [`Config::get`], but a missing path gives `Ok(None)`.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, CfgError>
    where
        T: TryFrom<Value, Error = CfgError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(CfgError::TypeError { code: Some(304), .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = CfgError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get the raw value at `path`.
    pub fn get_value(&self, path: &str) -> Result<&Value, CfgError> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();

        let mut current = self
            .document
            .get(first)
            .ok_or_else(|| not_found(path))?;

        for seg in segments {
            current = match current {
                Value::Struct(fields) => fields.get(seg),
                Value::Array(items) => seg.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            }
            .ok_or_else(|| not_found(path))?;
        }

        Ok(current)
    }

    /// Field names of the struct at `path`.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, CfgError> {
        match self.get_value(path)? {
            Value::Struct(fields) => Ok(fields.keys().cloned().collect()),
            other => Err(CfgError::TypeError {
                message: format!("Path '{}' is a {}, not a struct", path, other.kind_name()),
                hint: Some("Only structs have keys".into()),
                code: Some(306),
            }),
        }
    }

    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }
}

fn not_found(path: &str) -> CfgError {
    CfgError::TypeError {
        message: format!("Path '{}' not found in configuration", path),
        hint: Some("Check that the path exists in your config file".into()),
        code: Some(304),
    }
}

fn with_path(e: CfgError, path: &str) -> CfgError {
    match e {
        CfgError::TypeError { message, hint, code } => CfgError::TypeError {
            message: format!("{} (at `{}`)", message, path),
            hint,
            code,
        },
        other => other,
    }
}
