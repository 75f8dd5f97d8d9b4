use serde::Serialize;

/// How a field takes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text or number entry.
    Text,
    /// One value from a fixed list.
    Select { options: &'static [&'static str] },
    /// Checkbox group. Checking `exclusive` clears every other box, and
    /// checking any other box clears `exclusive`.
    MultiSelect {
        options: &'static [&'static str],
        exclusive: Option<&'static str>,
    },
}

impl FieldKind {
    pub fn is_multi(&self) -> bool {
        matches!(self, FieldKind::MultiSelect { .. })
    }

    pub fn options(&self) -> &'static [&'static str] {
        match *self {
            FieldKind::Text => &[],
            FieldKind::Select { options } | FieldKind::MultiSelect { options, .. } => options,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: false,
        }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select { options },
            required: false,
        }
    }

    pub const fn multi_select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        exclusive: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::MultiSelect { options, exclusive },
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// One page of the questionnaire. Fields are listed in display order, which
/// is also the order required fields are checked in.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [Field],
}

impl Step {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.required)
    }
}
