/// Pairs a record field with the header shown above its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub field: &'static str,
    pub label: &'static str,
}

impl ColumnDescriptor {
    pub const fn new(field: &'static str, label: &'static str) -> Self {
        Self { field, label }
    }
}

/// Input shape of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    SingleLine,
    MultiLine,
}

impl FieldKind {
    /// Rows the input occupies inside the form, borders included.
    pub fn height(&self) -> u16 {
        match self {
            FieldKind::SingleLine => 3,
            FieldKind::MultiLine => 5,
        }
    }
}

/// Drives one input of the create/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDescriptor {
    pub const fn line(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FieldKind::SingleLine,
            required: false,
        }
    }

    pub const fn text(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FieldKind::MultiLine,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
