


/// Properties quantified over every instruction word.
pub mod properties;
