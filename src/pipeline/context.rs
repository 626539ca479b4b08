use crate::db::KnowledgeStore;

/// Hospitals shown per specialist when a city was mentioned.
const MAX_CARE_OPTIONS: usize = 3;

/// Compose the local-knowledge text block for the matched symptoms.
///
/// One segment per symptom that has a store record; symptoms without a
/// record are skipped silently, as are store lookup failures — missing
/// local data is never surfaced to the user. Segments are separated by a
/// blank line; no segments means an empty string.
pub fn compose_context(store: &KnowledgeStore, symptoms: &[String], city: Option<&str>) -> String {
    let mut segments = Vec::new();

    for name in symptoms {
        let record = match store.symptom(name) {
            Ok(Some(record)) => record,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!(symptom = %name, error = %e, "symptom lookup failed, skipping");
                continue;
            }
        };

        let mut segment = format!(
            "{} may be related to: {}.\nSpecialists: {}.",
            title_case(name),
            record.causes.join(", "),
            record.specialists.join(", "),
        );

        if let Some(city) = city {
            // Specialist order is the symptom's stored priority order.
            for specialist in &record.specialists {
                let options = match store.care_options(city, specialist, MAX_CARE_OPTIONS) {
                    Ok(options) => options,
                    Err(e) => {
                        tracing::debug!(%city, %specialist, error = %e, "care lookup failed, skipping");
                        continue;
                    }
                };
                if options.is_empty() {
                    continue;
                }

                segment.push_str(&format!(
                    "\n\nIn {}, options for {}:",
                    title_case(city),
                    specialist
                ));
                for option in options {
                    segment.push_str(&format!(
                        "\n- {} — {} ({}) — rated {}. {}",
                        option.doctor_name,
                        option.hospital_name,
                        option.contact,
                        option.rating,
                        option.description,
                    ));
                }
            }
        }

        segments.push(segment);
    }

    segments.join("\n\n")
}

/// Upper-case the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
