//! Embedded reference disease catalog.
//!
//! All data in this module is hardcoded and fictional, derived from public
//! symptom-disease knowledge bases and augmented with risk-factor fields.
//! It stands in for the clinical catalog service of a production
//! deployment; no external systems are contacted.

use dxrank_contracts::profile::DiseaseProfile;

fn profile(name: &str, symptoms: &[&str], risk_factors: &[&str], base_prevalence: f64) -> DiseaseProfile {
    DiseaseProfile {
        name: name.to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        risk_factors: risk_factors.iter().map(|s| s.to_string()).collect(),
        base_prevalence,
    }
}

/// The bundled 20-disease catalog used by demos and tests.
///
/// Phrases are already normalized (lowercase, single spaces) so the catalog
/// contract holds without a loading pass.
pub fn bundled_catalog() -> Vec<DiseaseProfile> {
    vec![
        profile(
            "Common Cold",
            &["runny nose", "sneezing", "sore throat", "cough", "mild fever", "congestion", "fatigue"],
            &["contact with infected person", "winter season", "immunodeficiency"],
            0.30,
        ),
        profile(
            "Influenza",
            &["high fever", "chills", "muscle aches", "headache", "cough", "fatigue", "sore throat",
              "loss of appetite", "runny nose"],
            &["no flu vaccine", "elderly", "immunodeficiency", "winter season",
              "contact with infected person"],
            0.10,
        ),
        profile(
            "COVID-19",
            &["fever", "cough", "shortness of breath", "fatigue", "loss of taste", "loss of smell",
              "headache", "sore throat", "muscle aches", "diarrhea", "chest pain"],
            &["no covid vaccine", "elderly", "obesity", "diabetes", "hypertension",
              "immunodeficiency", "contact with infected person"],
            0.08,
        ),
        profile(
            "Pneumonia",
            &["high fever", "chills", "cough", "chest pain", "shortness of breath", "fatigue",
              "rapid breathing", "sweating", "nausea"],
            &["elderly", "smoking", "immunodeficiency", "chronic lung disease", "diabetes",
              "recent respiratory infection"],
            0.04,
        ),
        profile(
            "Bronchitis",
            &["cough", "mucus production", "fatigue", "shortness of breath", "chest discomfort",
              "mild fever", "chills"],
            &["smoking", "air pollution exposure", "repeated respiratory infections"],
            0.08,
        ),
        profile(
            "Asthma",
            &["shortness of breath", "wheezing", "chest tightness", "cough", "nocturnal symptoms"],
            &["family history of asthma", "allergies", "eczema", "smoking",
              "air pollution exposure"],
            0.06,
        ),
        profile(
            "Allergic Rhinitis",
            &["sneezing", "runny nose", "nasal congestion", "itchy eyes", "watery eyes", "cough"],
            &["family history of allergies", "eczema", "asthma", "spring season", "pet exposure"],
            0.15,
        ),
        profile(
            "Gastroenteritis",
            &["nausea", "vomiting", "diarrhea", "abdominal cramps", "mild fever", "headache",
              "muscle aches", "loss of appetite"],
            &["contaminated food", "contaminated water", "contact with infected person"],
            0.12,
        ),
        profile(
            "Urinary Tract Infection",
            &["burning urination", "frequent urination", "urgency to urinate", "cloudy urine",
              "pelvic pain", "mild fever", "back pain", "blood in urine"],
            &["female sex", "sexual activity", "diabetes", "urinary catheter", "kidney stones"],
            0.07,
        ),
        profile(
            "Hypertension",
            &["headache", "dizziness", "blurred vision", "chest pain", "shortness of breath",
              "nosebleed", "fatigue"],
            &["obesity", "family history of hypertension", "high salt diet",
              "sedentary lifestyle", "smoking", "diabetes", "elderly"],
            0.20,
        ),
        profile(
            "Type 2 Diabetes",
            &["frequent urination", "excessive thirst", "unexplained weight loss", "fatigue",
              "blurred vision", "slow healing wounds", "frequent infections"],
            &["obesity", "sedentary lifestyle", "family history of diabetes", "elderly",
              "hypertension", "high sugar diet"],
            0.10,
        ),
        profile(
            "Migraine",
            &["severe headache", "nausea", "vomiting", "sensitivity to light",
              "sensitivity to sound", "visual aura", "throbbing pain", "dizziness"],
            &["family history of migraine", "female sex", "hormonal changes", "stress",
              "sleep deprivation", "alcohol consumption"],
            0.12,
        ),
        profile(
            "Anxiety Disorder",
            &["excessive worry", "restlessness", "fatigue", "difficulty concentrating",
              "irritability", "muscle tension", "sleep disturbance", "palpitations",
              "shortness of breath"],
            &["family history of anxiety", "stress", "trauma", "substance abuse",
              "chronic illness"],
            0.15,
        ),
        profile(
            "Depression",
            &["persistent sadness", "loss of interest", "fatigue", "sleep disturbance",
              "appetite changes", "difficulty concentrating", "feelings of worthlessness",
              "psychomotor changes"],
            &["family history of depression", "trauma", "chronic illness", "stress",
              "substance abuse", "social isolation"],
            0.12,
        ),
        profile(
            "Appendicitis",
            &["right lower abdominal pain", "nausea", "vomiting", "fever", "loss of appetite",
              "rebound tenderness", "abdominal rigidity"],
            &["young age", "male sex", "family history of appendicitis"],
            0.02,
        ),
        profile(
            "Gastroesophageal Reflux Disease",
            &["heartburn", "acid regurgitation", "chest pain", "dysphagia", "chronic cough",
              "hoarseness", "nausea"],
            &["obesity", "smoking", "alcohol consumption", "pregnancy", "hiatal hernia",
              "high fat diet"],
            0.15,
        ),
        profile(
            "Hypothyroidism",
            &["fatigue", "weight gain", "cold intolerance", "constipation", "dry skin",
              "hair loss", "slow heart rate", "depression", "muscle weakness"],
            &["female sex", "family history of thyroid disease", "autoimmune disease", "elderly"],
            0.05,
        ),
        profile(
            "Anemia",
            &["fatigue", "weakness", "pale skin", "shortness of breath", "dizziness",
              "rapid heart rate", "cold hands and feet", "headache"],
            &["female sex", "poor diet", "chronic disease", "pregnancy", "vegetarian diet",
              "blood loss"],
            0.08,
        ),
        profile(
            "Coronary Artery Disease",
            &["chest pain", "shortness of breath", "fatigue", "palpitations", "chest tightness",
              "radiating arm pain", "sweating", "nausea"],
            &["smoking", "diabetes", "hypertension", "high cholesterol", "obesity",
              "family history of heart disease", "sedentary lifestyle", "elderly", "male sex"],
            0.06,
        ),
        profile(
            "Pulmonary Embolism",
            &["sudden shortness of breath", "chest pain", "rapid heart rate", "cough",
              "blood in sputum", "leg swelling", "dizziness", "fainting"],
            &["deep vein thrombosis", "prolonged immobility", "surgery", "cancer",
              "oral contraceptives", "pregnancy", "obesity"],
            0.01,
        ),
    ]
}

/// Every known symptom and risk-factor phrase across the bundled catalog,
/// deduplicated. This is the phrase vocabulary the reference answer parser
/// scans for incidental mentions.
pub fn known_phrases() -> Vec<String> {
    let mut phrases = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for profile in bundled_catalog() {
        for phrase in profile.symptoms.iter().chain(profile.risk_factors.iter()) {
            if seen.insert(phrase.clone()) {
                phrases.push(phrase.clone());
            }
        }
    }
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_satisfies_the_contract() {
        let profiles = bundled_catalog();
        assert_eq!(profiles.len(), 20);

        let mut names = std::collections::HashSet::new();
        for profile in &profiles {
            profile.validate().unwrap();
            assert!(names.insert(profile.name.clone()), "duplicate: {}", profile.name);
            for phrase in profile.symptoms.iter().chain(profile.risk_factors.iter()) {
                assert_eq!(phrase, &phrase.to_lowercase(), "unnormalized: {}", phrase);
            }
        }
    }

    #[test]
    fn known_phrases_are_deduplicated() {
        let phrases = known_phrases();
        let unique: std::collections::HashSet<_> = phrases.iter().collect();
        assert_eq!(phrases.len(), unique.len());
        assert!(phrases.contains(&"fatigue".to_string()));
        assert!(phrases.contains(&"smoking".to_string()));
    }
}
