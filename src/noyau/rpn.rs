// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
// Objectif:
// - Convertir une suite de Tok infixe en RPN, selon precedence + associativité
//   lues dans operateurs.rs.
//
// Règles:
// - opérande (variable / constante) : sortie directe
// - opérateur `op` : on dépile tant que le sommet est un opérateur et que
//     (op Gauche et prec(op) <= prec(sommet)) ou (op Droite et prec(op) < prec(sommet))
// - '(' : empilée ; ')' : dépile jusqu’à '(' (erreur si absente)
// - fin : dépile tout ; une '(' restante est une erreur
//
// NOTE:
// - La bonne formation (arité) n’est PAS vérifiée ici : "P AND" passe,
//   c’est l’évaluation qui échoue.

use log::debug;

use super::erreur::ErreurNoyau;
use super::jetons::{format_tokens, Tok};
use super::operateurs::{Associativite, Operateur};

fn doit_depiler(op: Operateur, sommet: Operateur) -> bool {
    match op.associativite() {
        Associativite::Gauche => op.precedence() <= sommet.precedence(),
        Associativite::Droite => op.precedence() < sommet.precedence(),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [P, AND, (, Q, OR, R, )]
///   rpn:    [P, Q, R, OR, AND]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for (indice, &tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Var(_) | Tok::Const(_) => out.push(tok),

            Tok::Op(op) => {
                while let Some(&Tok::Op(sommet)) = ops.last() {
                    if !doit_depiler(op, sommet) {
                        break;
                    }
                    out.push(Tok::Op(sommet));
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurNoyau::ParentheseFermanteOrpheline { indice }),
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(ErreurNoyau::ParentheseNonFermee);
        }
        out.push(op);
    }

    debug!("rpn: {}", format_tokens(&out));
    Ok(out)
}
