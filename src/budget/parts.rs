use std::collections::BTreeMap;

use super::service::ServiceSelection;

/// The fixed catalog of vehicle parts a quote covers, in form order.
pub const FIXED_PARTS: [&str; 28] = [
    "Para-choque Dian.",
    "Para-choque Tras.",
    "Capô",
    "Para-lama Esq.",
    "Para-lama Dir.",
    "Retrovisores",
    "Maçanetas",
    "Porta Dir. Diant.",
    "Porta Dir. Tras.",
    "Porta Esq. Tras.",
    "Porta Esq. Diant.",
    "Caixa de Ar Dir.",
    "Caixa de Ar Esq.",
    "Coluna Direita",
    "Coluna Esquerda",
    "Lateral Direita",
    "Lateral Esquerda",
    "Moldura Diant. Dir.",
    "Moldura Diant. Esq.",
    "Moldura Tras. Dir.",
    "Moldura Tras. Esq.",
    "Teto",
    "Tampa",
    "Porta-Malas Interno",
    "Painel Traseiro",
    "Polimento de Faróis",
    "Apliq. Para-cho. Dian.",
    "Apliq. Para-cho. Tras.",
];

/// Pre-seeds one empty selection per catalog part, the state a blank
/// quote form starts from. Stored records may still carry a subset or
/// extra keys; the store never enforces catalog completeness.
pub fn seed_services() -> BTreeMap<String, ServiceSelection> {
    FIXED_PARTS
        .iter()
        .map(|part| ((*part).to_string(), ServiceSelection::empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_every_catalog_part() {
        let services = seed_services();
        assert_eq!(services.len(), FIXED_PARTS.len());
        for part in FIXED_PARTS {
            assert!(services.contains_key(part), "missing part {part}");
        }
    }
}
