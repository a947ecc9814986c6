// src/noyau/format.rs
//
// Affichage des valeurs : forme “générale” à 6 chiffres significatifs.
// 10 -> "10", 7.35 -> "7.35", 1/3 -> "0.333333", F(93) -> "1.22002e+19"

const CHIFFRES_SIGNIFICATIFS: usize = 6;

/// Formate une valeur pour Result:, la pile et l’historique.
pub fn format_valeur(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // L’exposant est lu APRÈS arrondi (9.999996 -> 1e+01, pas 9.99999e+00).
    let sci = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, v);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exposant < -4 || exposant >= CHIFFRES_SIGNIFICATIFS as i32 {
        let signe = if exposant < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            sans_zeros_finaux(mantisse),
            signe,
            exposant.unsigned_abs()
        );
    }

    let decimales = (CHIFFRES_SIGNIFICATIFS as i32 - 1 - exposant).max(0) as usize;
    sans_zeros_finaux(&format!("{:.*}", decimales, v)).to_string()
}

/// Pile en texte, du plus ancien au plus récent, séparée par des espaces.
pub fn format_liste(valeurs: &[f64]) -> String {
    valeurs
        .iter()
        .map(|v| format_valeur(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sans_zeros_finaux(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
