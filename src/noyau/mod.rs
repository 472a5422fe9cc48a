//! Noyau logique (pur, sans I/O)
//!
//! Organisation interne :
//! - operateurs.rs : variables P/Q/R, opérateurs, précédences, alias
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard (infixe -> postfix)
//! - eval.rs       : évaluation RPN + trace des sous-expressions
//! - table.rs      : table de vérité complète + verdict tautologie
//! - format.rs     : rendu texte d’une table (mode lot)
//! - erreur.rs     : erreurs typées

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;
pub mod table;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurNoyau, GenreErreur};
pub use table::{table_verite, table_verite_detaillee, Demarche, TableVerite};
