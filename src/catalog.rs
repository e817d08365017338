/// Variables the support automation scripts cannot run without.
pub const REQUIRED_VARS: &[&str] = &[
    "SUPPORT_API_KEY", // support platform API key
    "BILLING_API_KEY", // Stripe/billing API key
];

/// Variables some features need; missing ones only produce a warning.
pub const OPTIONAL_VARS: &[&str] = &["SUPPORT_WEBHOOK_SECRET", "ANALYTICS_API_KEY"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRequirement {
    pub name: String,
    pub required: bool,
}

/// Ordered set of variable requirements. Each name appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<VariableRequirement>,
}

impl Catalog {
    /// Build a catalog from a required and an optional list.
    ///
    /// A name listed in both is kept as required. Repeats within one list
    /// collapse to the first occurrence.
    pub fn new<R, O>(required: R, optional: O) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        let mut entries: Vec<VariableRequirement> = Vec::new();

        for name in required {
            let name = name.into();
            if !entries.iter().any(|e| e.name == name) {
                entries.push(VariableRequirement { name, required: true });
            }
        }

        for name in optional {
            let name = name.into();
            match entries.iter().find(|e| e.name == name) {
                Some(existing) if existing.required => {
                    log::warn!("{} is listed as both required and optional, treating it as required", name);
                }
                Some(_) => {}
                None => entries.push(VariableRequirement { name, required: false }),
            }
        }

        Self { entries }
    }

    /// The catalog the `check-setup` binary validates against.
    pub fn builtin() -> Self {
        Self::new(REQUIRED_VARS.iter().copied(), OPTIONAL_VARS.iter().copied())
    }

    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter(|e| e.required).map(|e| e.name.as_str())
    }

    pub fn optional(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter(|e| !e.required).map(|e| e.name.as_str())
    }
}
