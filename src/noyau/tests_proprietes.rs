//! Tests de propriétés (campagne) : nombre de lignes, précédences, verdicts, erreurs.
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - AND et OR ont la MÊME précédence (2), associativité gauche :
//!   "P OR Q AND R" se lit (P OR Q) AND R.
//! - Les libellés n’ont pas de parenthèses : "(P ^ Q) v R" et "P ^ (Q v R)"
//!   donnent tous deux "P ^ Q v R". Identité purement textuelle.

use super::erreur::{ErreurNoyau, GenreErreur};
use super::eval::{eval_rpn, Affectation};
use super::jetons::tokenize;
use super::operateurs::Variable;
use super::rpn::to_rpn;
use super::table::{table_verite, TableVerite};

fn table_ok(expr: &str) -> TableVerite {
    table_verite(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn genre_err(expr: &str) -> GenreErreur {
    match table_verite(expr) {
        Ok(t) => panic!("erreur attendue pour expr={expr:?}, table={t:?}"),
        Err(e) => e.genre(),
    }
}

/// Valeur de la colonne `entete` pour chaque ligne.
fn colonne(t: &TableVerite, entete: &str) -> Vec<bool> {
    let i = t
        .entetes
        .iter()
        .position(|e| e == entete)
        .unwrap_or_else(|| panic!("colonne {entete:?} absente de {:?}", t.entetes));
    t.lignes.iter().map(|l| l[i]).collect()
}

/* ------------------------ Nombre de lignes ------------------------ */

#[test]
fn prop_lignes_puissance_de_deux() {
    for (expr, k) in [("P", 1), ("Q -> P", 2), ("P ^ Q ^ R", 3), ("~R", 1), ("R <-> R", 1)] {
        let t = table_ok(expr);
        assert_eq!(t.variables.len(), k, "expr={expr:?}");
        assert_eq!(t.lignes.len(), 1 << k, "expr={expr:?}");
        assert_eq!(t.finales.len(), 1 << k, "expr={expr:?}");
    }
    assert_eq!(genre_err("TRUE -> FALSE"), GenreErreur::AucuneVariable);
}

#[test]
fn prop_premieres_colonnes_comptent_en_binaire() {
    let t = table_ok("P ^ Q ^ R");
    for (n, ligne) in t.lignes.iter().enumerate() {
        let bits = [(n >> 2) & 1 == 1, (n >> 1) & 1 == 1, n & 1 == 1];
        assert_eq!(&ligne[..3], &bits, "ligne {n}");
    }
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn prop_et_ou_meme_precedence_gauche() {
    let t = table_ok("P OR Q AND R");
    assert_eq!(t.entetes, vec!["P", "Q", "R", "P v Q", "P v Q ^ R"]);

    // (P OR Q) AND R : faux dès que R est faux
    let attendu: Vec<bool> = (0..8usize)
        .map(|n| {
            let (p, q, r) = ((n >> 2) & 1 == 1, (n >> 1) & 1 == 1, n & 1 == 1);
            (p || q) && r
        })
        .collect();
    assert_eq!(t.finales, attendu);
}

#[test]
fn prop_implique_lie_moins_que_et() {
    // P -> (Q ^ R)
    let t = table_ok("P -> Q ^ R");
    assert_eq!(t.entetes.last().map(String::as_str), Some("P -> Q ^ R"));
    assert_eq!(colonne(&t, "Q ^ R").len(), 8);
    // P=1,Q=1,R=0 (ligne 6) : faux ; P=0 : toujours vrai
    assert!(!t.finales[6]);
    assert!(t.finales[..4].iter().all(|&b| b));
}

/* ------------------------ Négation ------------------------ */

#[test]
fn prop_double_negation() {
    let rpn = to_rpn(&tokenize("~~P").unwrap()).unwrap();
    let a = Affectation::new().avec(Variable::P, true);
    let (v, trace) = eval_rpn(&rpn, &a).unwrap();
    assert!(v);

    let red: Vec<&str> = trace.reductions().map(|e| e.libelle.as_str()).collect();
    assert_eq!(red, vec!["~P", "~~P"]);

    let t = table_ok("~~P");
    assert_eq!(colonne(&t, "~~P"), colonne(&t, "P"));
}

#[test]
fn prop_idempotence_table() {
    let expr = "~(P ^ Q) <-> ~P or ~Q";
    assert_eq!(table_ok(expr), table_ok(expr));
}

/* ------------------------ Tautologies ------------------------ */

#[test]
fn prop_tautologies() {
    for expr in [
        "P OR ~P",
        "P -> P",
        "(P -> Q) <-> (~Q -> ~P)",
        "~(P ^ Q) <-> (~P or ~Q)",
        "((P -> Q) ^ (Q -> R)) -> (P -> R)",
        "P or TRUE",
    ] {
        let t = table_ok(expr);
        assert!(t.tautologie, "expr={expr:?} devrait être une tautologie");
        assert!(t.finales.iter().all(|&b| b), "expr={expr:?}");
    }

    let t = table_ok("P OR ~P");
    assert_eq!(t.lignes.len(), 2);
}

#[test]
fn prop_non_tautologies() {
    for expr in ["P AND Q", "P -> Q", "P <-> ~P", "P ^ FALSE", "Q"] {
        assert!(!table_ok(expr).tautologie, "expr={expr:?}");
    }

    // une seule ligne fausse suffit (P=1,Q=1,R=1 est la dernière ligne)
    let t = table_ok("~(P ^ Q ^ R)");
    assert_eq!(t.finales.iter().filter(|&&b| !b).count(), 1);
    assert!(!t.finales[7]);
    assert!(!t.tautologie);
}

/* ------------------------ Colonnes ------------------------ */

#[test]
fn prop_colonnes_dedoublonnees() {
    let t = table_ok("(P AND Q) OR (P AND Q)");
    let n = t.entetes.iter().filter(|e| e.as_str() == "P ^ Q").count();
    assert_eq!(n, 1);
}

#[test]
fn prop_ordre_de_decouverte() {
    let t = table_ok("(Q -> R) ^ ~P");
    assert_eq!(t.entetes, vec!["P", "Q", "R", "Q -> R", "~P", "Q -> R ^ ~P"]);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn prop_erreurs_typees() {
    assert_eq!(genre_err("P AND"), GenreErreur::Eval);
    assert_eq!(genre_err("P Q"), GenreErreur::Eval);
    assert_eq!(genre_err("(P AND Q"), GenreErreur::Syntaxe);
    assert_eq!(genre_err("P AND Q)"), GenreErreur::Syntaxe);
    assert_eq!(genre_err("P & Q"), GenreErreur::Lex);
    assert_eq!(genre_err("()"), GenreErreur::AucuneVariable);

    assert_eq!(
        table_verite("P & Q"),
        Err(ErreurNoyau::Lexicale {
            caractere: '&',
            position: 2
        })
    );
}

#[test]
fn prop_messages_lisibles() {
    let msg = table_verite("P & Q").unwrap_err().to_string();
    assert!(msg.contains("caractère inattendu"), "{msg}");

    let msg = table_verite("(P").unwrap_err().to_string();
    assert!(msg.contains("parenthèses non fermées"), "{msg}");

    let msg = table_verite("P ->").unwrap_err().to_string();
    assert!(msg.contains("IMPLIES"), "{msg}");
}
