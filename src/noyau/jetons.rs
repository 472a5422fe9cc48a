// src/noyau/jetons.rs

use log::trace;

use super::erreur::ErreurNoyau;
use super::operateurs::{Alias, Operateur, Variable, TABLE_ALIAS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tok {
    Var(Variable),
    Const(bool),
    Op(Operateur),

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - parenthèses ( )
/// - opérateurs ~ ^ or -> <-> et NOT AND OR IMPLIES IFF (insensible à la casse)
/// - variables P Q R (insensible à la casse)
/// - constantes TRUE FALSE
///
/// Pas de frontière de mot : "PQ" donne [P, Q], "NOTP" donne [NOT, P].
/// La bonne formation (opérandes, parenthèses) n’est PAS vérifiée ici.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out = Vec::new();
    // ASCII seulement : un char reste un char, les positions restent alignées.
    let chars: Vec<char> = s.chars().map(|c| c.to_ascii_uppercase()).collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs + constantes (le plus long d’abord, cf. TABLE_ALIAS)
        if let Some((longueur, alias)) = cherche_alias(&chars[i..]) {
            out.push(match alias {
                Alias::Op(op) => Tok::Op(op),
                Alias::Const(b) => Tok::Const(b),
            });
            i += longueur;
            continue;
        }

        if let Some(v) = Variable::depuis_lettre(c) {
            out.push(Tok::Var(v));
            i += 1;
            continue;
        }

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        return Err(ErreurNoyau::Lexicale {
            caractere: s.chars().nth(i).unwrap_or(c),
            position: i,
        });
    }

    trace!("jetons: {}", format_tokens(&out));
    Ok(out)
}

/// Premier alias de la table qui est préfixe de `reste`.
fn cherche_alias(reste: &[char]) -> Option<(usize, Alias)> {
    TABLE_ALIAS.iter().find_map(|(motif, alias)| {
        let n = motif.chars().count();
        let prefixe = reste.len() >= n && motif.chars().zip(reste).all(|(m, c)| m == *c);
        prefixe.then_some((n, *alias))
    })
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte canonique.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Var(v) => v.nom(),
            Tok::Const(true) => "TRUE",
            Tok::Const(false) => "FALSE",
            Tok::Op(op) => op.descripteur().nom,

            Tok::LPar => "(",
            Tok::RPar => ")",
        };
        out.push(s);
    }
    out.join(" ")
}
