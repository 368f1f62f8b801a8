//! Sample patient notes matching the test patients of the assessment service.

use mongodb::bson::{doc, DateTime, Document};
use serde::{Deserialize, Serialize};

/// A single sample note ready for insertion.
///
/// `createdDate` is not part of the fixture: it is stamped with the
/// wall-clock time when the document is built, so successive runs
/// produce different timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteFixture {
    #[serde(rename = "patId")]
    pub pat_id: i32,
    pub patient: String,
    pub note: String,
}

impl NoteFixture {
    pub fn new(pat_id: i32, patient: &str, note: &str) -> Self {
        Self {
            pat_id,
            patient: patient.to_string(),
            note: note.to_string(),
        }
    }

    /// Builds the document inserted into the collection.
    ///
    /// `patId` is stored as a BSON int32 to satisfy the validator's
    /// `int` constraint.
    pub fn to_document(&self, created_date: DateTime) -> Document {
        doc! {
            "patId": self.pat_id,
            "patient": self.patient.clone(),
            "note": self.note.clone(),
            "createdDate": created_date,
        }
    }
}

/// The nine reference notes, spanning the four test patients used for
/// risk-classification testing downstream.
///
/// Patients 2, 3 and 4 deliberately have several notes each; the
/// repeated `patId` values are intentional, not duplicates to clean up.
pub fn mediscreen_notes() -> Vec<NoteFixture> {
    vec![
        NoteFixture::new(
            1,
            "TestNone",
            "Le patient déclare qu'il 'se sent très bien' Poids égal ou inférieur au poids recommandé",
        ),
        NoteFixture::new(
            2,
            "TestBorderline",
            "Le patient déclare qu'il ressent beaucoup de stress au travail Il se plaint également que son audition est anormale dernièrement",
        ),
        NoteFixture::new(
            2,
            "TestBorderline",
            "Le patient déclare avoir fait une réaction aux médicaments au cours des 3 derniers mois Il remarque également que son audition continue d'être anormale",
        ),
        NoteFixture::new(3, "TestInDanger", "Le patient déclare qu'il fume depuis peu"),
        NoteFixture::new(
            3,
            "TestInDanger",
            "Le patient déclare qu'il est fumeur et qu'il a cessé de fumer l'année dernière Il se plaint également de crises d'apnée respiratoire anormales Tests de laboratoire indiquant un taux de cholestérol LDL élevé",
        ),
        NoteFixture::new(
            4,
            "TestEarlyOnset",
            "Le patient déclare qu'il lui est devenu difficile de monter les escaliers Il se plaint également d'être essoufflé Tests de laboratoire indiquant que les anticorps sont élevés Réaction aux médicaments",
        ),
        NoteFixture::new(
            4,
            "TestEarlyOnset",
            "Le patient déclare qu'il a mal au dos lorsqu'il reste assis pendant longtemps",
        ),
        NoteFixture::new(
            4,
            "TestEarlyOnset",
            "Le patient déclare avoir commencé à fumer depuis peu Hémoglobine A1C supérieure au niveau recommandé",
        ),
        NoteFixture::new(4, "TestEarlyOnset", "Taille, Poids, Cholestérol, Vertige et Réaction"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_nine_notes_four_patients() {
        let notes = mediscreen_notes();
        assert_eq!(notes.len(), 9);

        let mut patients: Vec<&str> = notes.iter().map(|n| n.patient.as_str()).collect();
        patients.sort();
        patients.dedup();
        assert_eq!(
            patients,
            vec!["TestBorderline", "TestEarlyOnset", "TestInDanger", "TestNone"]
        );
    }

    #[test]
    fn test_patient_three_has_two_notes() {
        let notes = mediscreen_notes();
        let in_danger: Vec<&NoteFixture> = notes.iter().filter(|n| n.pat_id == 3).collect();

        assert_eq!(in_danger.len(), 2);
        assert!(in_danger.iter().all(|n| n.patient == "TestInDanger"));
    }

    #[test]
    fn test_patient_four_has_four_notes() {
        let notes = mediscreen_notes();
        assert_eq!(notes.iter().filter(|n| n.pat_id == 4).count(), 4);
        assert_eq!(notes.iter().filter(|n| n.pat_id == 2).count(), 2);
        assert_eq!(notes.iter().filter(|n| n.pat_id == 1).count(), 1);
    }

    #[test]
    fn test_to_document_stamps_created_date() {
        let stamp = DateTime::now();
        let doc = mediscreen_notes()[0].to_document(stamp);

        assert_eq!(doc.get("patId"), Some(&Bson::Int32(1)));
        assert_eq!(doc.get_str("patient").unwrap(), "TestNone");
        assert!(!doc.get_str("note").unwrap().is_empty());
        assert_eq!(doc.get_datetime("createdDate").unwrap(), &stamp);
    }
}
