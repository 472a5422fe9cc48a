// src/noyau/operateurs.rs
//
// Tables fixes du langage : variables, opérateurs, alias de surface.
// Tout est statique et immuable ; rpn.rs et eval.rs lisent ces tables par référence.

use std::fmt;

/* ------------------------ Variables ------------------------ */

/// Les trois variables propositionnelles. L’ordre dérivé (P < Q < R) est l’ordre des colonnes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variable {
    P,
    Q,
    R,
}

impl Variable {
    pub const TOUTES: [Variable; 3] = [Variable::P, Variable::Q, Variable::R];

    pub fn nom(self) -> &'static str {
        match self {
            Variable::P => "P",
            Variable::Q => "Q",
            Variable::R => "R",
        }
    }

    /// Insensible à la casse : 'p' et 'P' donnent P.
    pub fn depuis_lettre(c: char) -> Option<Variable> {
        match c.to_ascii_uppercase() {
            'P' => Some(Variable::P),
            'Q' => Some(Variable::Q),
            'R' => Some(Variable::R),
            _ => None,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Non,
    Et,
    Ou,
    Implique,
    Equivaut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Fonction booléenne de l’opérateur ; la variante fixe l’arité.
#[derive(Clone, Copy, Debug)]
pub enum Fonction {
    Unaire(fn(bool) -> bool),
    Binaire(fn(bool, bool) -> bool),
}

impl Fonction {
    pub fn arite(&self) -> usize {
        match self {
            Fonction::Unaire(_) => 1,
            Fonction::Binaire(_) => 2,
        }
    }
}

#[derive(Debug)]
pub struct Descripteur {
    pub nom: &'static str,
    pub precedence: u8,
    pub associativite: Associativite,
    pub fonction: Fonction,
    /// Glyphe utilisé dans les libellés de sous-expressions.
    pub glyphe: &'static str,
}

fn non(a: bool) -> bool {
    !a
}

fn et(a: bool, b: bool) -> bool {
    a && b
}

fn ou(a: bool, b: bool) -> bool {
    a || b
}

fn implique(a: bool, b: bool) -> bool {
    !a || b
}

fn equivaut(a: bool, b: bool) -> bool {
    a == b
}

static NON: Descripteur = Descripteur {
    nom: "NOT",
    precedence: 3,
    associativite: Associativite::Droite,
    fonction: Fonction::Unaire(non),
    glyphe: "~",
};

static ET: Descripteur = Descripteur {
    nom: "AND",
    precedence: 2,
    associativite: Associativite::Gauche,
    fonction: Fonction::Binaire(et),
    glyphe: "^",
};

static OU: Descripteur = Descripteur {
    nom: "OR",
    precedence: 2,
    associativite: Associativite::Gauche,
    fonction: Fonction::Binaire(ou),
    glyphe: "v",
};

static IMPLIQUE: Descripteur = Descripteur {
    nom: "IMPLIES",
    precedence: 1,
    associativite: Associativite::Gauche,
    fonction: Fonction::Binaire(implique),
    glyphe: "->",
};

static EQUIVAUT: Descripteur = Descripteur {
    nom: "IFF",
    precedence: 1,
    associativite: Associativite::Gauche,
    fonction: Fonction::Binaire(equivaut),
    glyphe: "<->",
};

impl Operateur {
    pub fn descripteur(self) -> &'static Descripteur {
        match self {
            Operateur::Non => &NON,
            Operateur::Et => &ET,
            Operateur::Ou => &OU,
            Operateur::Implique => &IMPLIQUE,
            Operateur::Equivaut => &EQUIVAUT,
        }
    }

    pub fn precedence(self) -> u8 {
        self.descripteur().precedence
    }

    pub fn associativite(self) -> Associativite {
        self.descripteur().associativite
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descripteur().nom)
    }
}

/* ------------------------ Alias de surface ------------------------ */

/// Ce qu’un alias produit : un opérateur ou une constante.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alias {
    Op(Operateur),
    Const(bool),
}

/// Motifs en MAJUSCULES, essayés dans l’ordre : opérateurs d’abord (le plus long d’abord
/// pour `<->` / `->`), puis les constantes.
pub const TABLE_ALIAS: &[(&str, Alias)] = &[
    ("<->", Alias::Op(Operateur::Equivaut)),
    ("->", Alias::Op(Operateur::Implique)),
    ("~", Alias::Op(Operateur::Non)),
    ("^", Alias::Op(Operateur::Et)),
    ("OR", Alias::Op(Operateur::Ou)),
    ("AND", Alias::Op(Operateur::Et)),
    ("NOT", Alias::Op(Operateur::Non)),
    ("IMPLIES", Alias::Op(Operateur::Implique)),
    ("IFF", Alias::Op(Operateur::Equivaut)),
    ("TRUE", Alias::Const(true)),
    ("FALSE", Alias::Const(false)),
];
