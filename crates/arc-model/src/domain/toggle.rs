use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Serialize};

/// Optional boolean switch with an explicit "not specified" state.
///
/// On the wire a toggle is a nullable boolean: `Unset` is written as an absent
/// field (or `null`), the other states as `true` / `false`.
/// The model never decides what `Unset` means; consumers pick the default
/// through [`Toggle::resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Toggle {
    /// No value was provided.
    #[default]
    Unset,
    /// Explicitly switched on.
    Enabled,
    /// Explicitly switched off.
    Disabled,
}

impl Toggle {
    /// Returns `true` if no value was provided.
    pub const fn is_unset(&self) -> bool {
        matches!(self, Toggle::Unset)
    }

    /// Collapse the toggle to a boolean, using `default` for `Unset`.
    pub const fn resolve(self, default: bool) -> bool {
        match self {
            Toggle::Unset => default,
            Toggle::Enabled => true,
            Toggle::Disabled => false,
        }
    }

    /// Get the raw nullable value.
    pub const fn as_option(self) -> Option<bool> {
        match self {
            Toggle::Unset => None,
            Toggle::Enabled => Some(true),
            Toggle::Disabled => Some(false),
        }
    }
}

impl From<bool> for Toggle {
    fn from(b: bool) -> Self {
        if b { Toggle::Enabled } else { Toggle::Disabled }
    }
}

impl From<Option<bool>> for Toggle {
    fn from(v: Option<bool>) -> Self {
        v.map_or(Toggle::Unset, Toggle::from)
    }
}

impl From<Toggle> for Option<bool> {
    fn from(t: Toggle) -> Self {
        t.as_option()
    }
}

impl JsonSchema for Toggle {
    fn schema_name() -> String {
        "Toggle".to_owned()
    }

    fn is_referenceable() -> bool {
        false
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <Option<bool>>::json_schema(generator)
    }
}
