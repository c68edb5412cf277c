// Domain-layer modules and shared errors/models
pub mod form {
    pub use crate::form::*;
}

pub mod render {
    pub use crate::render::*;
}

pub mod comparison {
    pub use crate::comparison::*;
}

pub mod glossary {
    pub use crate::glossary::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}
