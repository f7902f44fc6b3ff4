/// Declares a record struct whose named fields are all text.
///
/// Generates the struct with an `id` plus the listed `String` fields, serde
/// derives for seed loading, and the `Record` impl mapping field names to
/// struct members.
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($field:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        $vis struct $name {
            pub id: $crate::records::RecordId,
            $(
                #[serde(default)]
                pub $field: String,
            )*
        }

        impl $crate::records::Record for $name {
            fn id(&self) -> $crate::records::RecordId {
                self.id
            }

            fn set_id(&mut self, id: $crate::records::RecordId) {
                self.id = id;
            }

            fn field(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($field) => Some(self.$field.as_str()),)*
                    _ => None,
                }
            }

            fn set_field(&mut self, name: &str, value: String) -> bool {
                match name {
                    $(
                        stringify!($field) => {
                            self.$field = value;
                            true
                        }
                    )*
                    _ => false,
                }
            }
        }
    };
}

pub(crate) use record;
