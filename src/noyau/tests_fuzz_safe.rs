//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - toute erreur doit être typée (jamais de panique)
//! - invariants : 2^k lignes, lignes alignées sur les en-têtes, verdict = ET des finales

use std::time::{Duration, Instant};

use super::erreur::GenreErreur;
use super::table::{table_verite, TableVerite};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const ATOMES: [&str; 8] = ["P", "Q", "R", "p", "q", "r", "TRUE", "false"];
const BINAIRES: [&str; 9] = ["^", "AND", "or", "OR", "->", "implies", "<->", "IFF", "and"];

fn gen_atom(rng: &mut Rng) -> String {
    ATOMES[rng.pick(ATOMES.len() as u32) as usize].to_string()
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(5) {
        0 => gen_atom(rng),
        1 => format!("~{}", gen_expr(rng, depth - 1)),
        2 => format!("NOT ({})", gen_expr(rng, depth - 1)),
        _ => {
            let op = BINAIRES[rng.pick(BINAIRES.len() as u32) as usize];
            format!(
                "({} {op} {})",
                gen_expr(rng, depth - 1),
                gen_expr(rng, depth - 1)
            )
        }
    }
}

/// Bruit : suppression / insertion d’un caractère, pour produire des entrées mal formées.
fn abimer(rng: &mut Rng, s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return s.to_string();
    }
    let i = rng.pick(chars.len() as u32) as usize;
    match rng.pick(3) {
        0 => {
            chars.remove(i);
        }
        1 => chars.insert(i, ['(', ')', '&', '^', '-'][rng.pick(5) as usize]),
        _ => chars.truncate(i),
    }
    chars.into_iter().collect()
}

fn check_invariants(expr: &str, t: &TableVerite) {
    let k = t.variables.len();
    assert!((1..=3).contains(&k), "expr={expr:?}");
    assert_eq!(t.lignes.len(), 1 << k, "expr={expr:?}");
    assert!(
        t.lignes.iter().all(|l| l.len() == t.entetes.len()),
        "expr={expr:?}: lignes non alignées"
    );
    assert_eq!(
        t.tautologie,
        t.finales.iter().all(|&b| b),
        "expr={expr:?}: verdict incohérent"
    );

    // en-têtes uniques
    for (i, e) in t.entetes.iter().enumerate() {
        assert!(
            !t.entetes[i + 1..].contains(e),
            "expr={expr:?}: en-tête {e:?} en double"
        );
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut seen_ok = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match table_verite(&expr) {
            Ok(t) => {
                check_invariants(&expr, &t);
                // déterminisme
                assert_eq!(table_verite(&expr).as_ref(), Ok(&t), "expr={expr:?}");
                seen_ok += 1;
            }
            Err(e) => {
                // seul cas légitime pour une expression bien formée : que des constantes
                assert_eq!(e.genre(), GenreErreur::AucuneVariable, "expr={expr:?} err={e}");
            }
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_entrees_abimees_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let propre = gen_expr(&mut rng, 3);
        let expr = abimer(&mut rng, &propre);

        match table_verite(&expr) {
            Ok(t) => check_invariants(&expr, &t),
            Err(_) => seen_err += 1,
        }
    }

    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_negations_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = format!("{}P", "~".repeat(501));
    let t = table_verite(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // nombre impair de négations : colonne finale = non P
    assert_eq!(t.finales, vec![true, false]);
    assert_eq!(t.entetes.len(), 1 + 501);
}
