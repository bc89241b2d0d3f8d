/// Inputs on the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    ContactNo,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::ContactNo,
        Field::Email,
        Field::Password,
    ];

    /// Name used both for the input element and the JSON body
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::MiddleName => "middleName",
            Field::LastName => "lastName",
            Field::ContactNo => "contactNo",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{}:", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::Email | Field::Password)
    }

    pub fn input_type(&self, show_password: bool) -> &'static str {
        match self {
            Field::Password if !show_password => "password",
            _ => "text",
        }
    }
}
