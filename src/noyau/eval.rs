//! Noyau : évaluation d’une RPN pour une affectation donnée.
//!
//! Balayage unique gauche -> droite sur une pile de (libellé, valeur).
//! Le produit principal est la trace : elle alimente les colonnes de la table.

use std::collections::BTreeMap;

use super::erreur::ErreurNoyau;
use super::jetons::Tok;
use super::operateurs::{Fonction, Variable};

/// Valeurs des variables pour une ligne de la table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affectation {
    valeurs: BTreeMap<Variable, bool>,
}

impl Affectation {
    pub fn valeur(&self, v: Variable) -> Option<bool> {
        self.valeurs.get(&v).copied()
    }
}

#[cfg(test)]
impl Affectation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec(mut self, v: Variable, valeur: bool) -> Self {
        self.valeurs.insert(v, valeur);
        self
    }
}

impl FromIterator<(Variable, bool)> for Affectation {
    fn from_iter<I: IntoIterator<Item = (Variable, bool)>>(iter: I) -> Self {
        Self {
            valeurs: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreEtape {
    /// Variable ou constante empilée telle quelle.
    Operande,
    /// Résultat d’un opérateur (sous-expression).
    Reduction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    pub libelle: String,
    pub valeur: bool,
    pub genre: GenreEtape,
}

/// Trace d’une évaluation, dans l’ordre de calcul.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    pub etapes: Vec<Etape>,
}

impl Trace {
    fn pousse(&mut self, libelle: &str, valeur: bool, genre: GenreEtape) {
        self.etapes.push(Etape {
            libelle: libelle.to_string(),
            valeur,
            genre,
        });
    }

    /// Seulement les sous-expressions (ce qui devient des colonnes).
    pub fn reductions(&self) -> impl Iterator<Item = &Etape> {
        self.etapes
            .iter()
            .filter(|e| e.genre == GenreEtape::Reduction)
    }

    #[cfg(test)]
    pub fn libelles(&self) -> Vec<&str> {
        self.etapes.iter().map(|e| e.libelle.as_str()).collect()
    }
}

/// Évalue une RPN. Retourne la valeur finale et la trace complète.
///
/// Erreurs : opérande manquant (arité), pile finale != 1, variable absente de
/// l’affectation, parenthèse égarée dans la RPN.
pub fn eval_rpn(rpn: &[Tok], affectation: &Affectation) -> Result<(bool, Trace), ErreurNoyau> {
    let mut st: Vec<(String, bool)> = Vec::with_capacity(rpn.len());
    let mut trace = Trace::default();

    for tok in rpn {
        match *tok {
            Tok::Var(v) => {
                let valeur = affectation
                    .valeur(v)
                    .ok_or(ErreurNoyau::VariableInconnue { nom: v.nom() })?;
                trace.pousse(v.nom(), valeur, GenreEtape::Operande);
                st.push((v.nom().to_string(), valeur));
            }

            Tok::Const(b) => {
                let libelle = if b { "TRUE" } else { "FALSE" };
                trace.pousse(libelle, b, GenreEtape::Operande);
                st.push((libelle.to_string(), b));
            }

            Tok::Op(op) => {
                let d = op.descripteur();
                let arite = d.fonction.arite();
                if st.len() < arite {
                    return Err(ErreurNoyau::OperandeManquant { operateur: op });
                }

                // arguments dans l’ordre d’empilement : a puis b
                let args = st.split_off(st.len() - arite);
                let (libelle, valeur) = match (d.fonction, args.as_slice()) {
                    (Fonction::Unaire(f), [(la, a)]) => (format!("{}{la}", d.glyphe), f(*a)),
                    (Fonction::Binaire(f), [(la, a), (lb, b)]) => {
                        (format!("{la} {} {lb}", d.glyphe), f(*a, *b))
                    }
                    _ => return Err(ErreurNoyau::OperandeManquant { operateur: op }),
                };

                trace.pousse(&libelle, valeur, GenreEtape::Reduction);
                st.push((libelle, valeur));
            }

            Tok::LPar | Tok::RPar => return Err(ErreurNoyau::ParentheseEnRpn),
        }
    }

    match st.as_slice() {
        [(_, valeur)] => Ok((*valeur, trace)),
        _ => Err(ErreurNoyau::PileInvalide {
            restants: st.len(),
        }),
    }
}
