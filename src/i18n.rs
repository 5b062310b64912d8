//! English / French display labels.
//!
//! Values are always stored in English; translation only happens when rows,
//! headers and chart titles are rendered.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

/// (english, french)
const FRENCH: &[(&str, &str)] = &[
    // headers
    ("Number", "Numéro"),
    ("Amount", "Montant"),
    ("Status", "Statut"),
    ("First Name", "Prénom"),
    ("Last Name", "Nom"),
    ("Position", "Poste"),
    ("Department", "Département"),
    ("Salary", "Salaire"),
    ("Hire Date", "Date d'embauche"),
    ("Name", "Nom"),
    ("Category", "Catégorie"),
    ("Supplier", "Fournisseur"),
    ("Unit Cost", "Coût unitaire"),
    ("Unit Type", "Unité"),
    ("Stock", "Stock"),
    ("Image", "Image"),
    ("Client Email", "Email client"),
    ("Start Date", "Date de début"),
    ("End Date", "Date de fin"),
    ("Budget", "Budget"),
    ("Client Name", "Nom du client"),
    ("Location", "Lieu"),
    ("Phone", "Téléphone"),
    ("Project", "Projet"),
    ("Invoice Amount", "Montant facturé"),
    ("Deadline", "Échéance"),
    ("Description", "Description"),
    ("Priority", "Priorité"),
    ("Assigned To", "Assigné à"),
    ("Created", "Créé le"),
    ("Updated", "Modifié le"),
    // vocabulary
    ("Paid", "Payé"),
    ("Pending", "En attente"),
    ("Overdue", "En retard"),
    ("Planned", "Planifié"),
    ("In Progress", "En cours"),
    ("Completed", "Terminé"),
    ("On Hold", "En pause"),
    ("To Do", "À faire"),
    ("Low", "Basse"),
    ("Medium", "Moyenne"),
    ("High", "Haute"),
    // report / chart titles
    ("Invoice Report", "Rapport des factures"),
    ("Employee Report", "Rapport des employés"),
    ("Material Report", "Rapport des matériaux"),
    ("Project Report", "Rapport des projets"),
    ("Client Report", "Rapport des clients"),
    ("Task Report", "Rapport des tâches"),
    ("Payment Status Distribution", "Répartition des statuts de paiement"),
    ("Monthly Payments", "Paiements mensuels"),
    ("Employees per Department", "Employés par département"),
    ("Salary by Department", "Salaires par département"),
    ("Materials per Category", "Matériaux par catégorie"),
    ("Stock by Category", "Stock par catégorie"),
    ("Projects by Status", "Projets par statut"),
    ("Budget by Status", "Budget par statut"),
    ("Clients per Project", "Clients par projet"),
    ("Invoice Amount by Project", "Montant facturé par projet"),
    ("Tasks by Status", "Tâches par statut"),
    ("Tasks by Priority", "Tâches par priorité"),
];

/// Translate an English label; unknown labels are returned unchanged.
pub fn tr(lang: Language, label: &str) -> String {
    match lang {
        Language::En => label.to_string(),
        Language::Fr => FRENCH
            .iter()
            .find(|(en, _)| *en == label)
            .map(|(_, fr)| fr.to_string())
            .unwrap_or_else(|| label.to_string()),
    }
}

/// Map a French label back to its English form (case-insensitive).
pub fn to_english(label: &str) -> Option<&'static str> {
    let needle = label.trim().to_lowercase();
    FRENCH
        .iter()
        .find(|(_, fr)| fr.to_lowercase() == needle)
        .map(|(en, _)| *en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_identity() {
        assert_eq!(tr(Language::En, "Pending"), "Pending");
    }

    #[test]
    fn french_translates_status_and_headers() {
        assert_eq!(tr(Language::Fr, "Paid"), "Payé");
        assert_eq!(tr(Language::Fr, "Overdue"), "En retard");
        assert_eq!(tr(Language::Fr, "Number"), "Numéro");
        assert_eq!(tr(Language::Fr, "ID"), "ID");
    }

    #[test]
    fn reverse_lookup_ignores_case() {
        assert_eq!(to_english("en attente"), Some("Pending"));
        assert_eq!(to_english("PAYÉ"), Some("Paid"));
        assert_eq!(to_english("whatever"), None);
    }
}
