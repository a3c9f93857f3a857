use crate::catalog::{Catalog, Gender, Target};
use crate::error::{FaceGenError, Result};

/// Catalog integrity precondition. Runs once, before any character is touched.
pub fn validate_catalog(cat: &Catalog, required_head_parts: &[String]) -> Result<()> {
    for g in [Gender::Male, Gender::Female] {
        let gc = cat.gender(g);

        // Base layer needs at least one skin template color to blend.
        if gc.skin_swatches().is_empty() {
            return Err(FaceGenError::Validation(format!(
                "{g:?}: no skin tone colors in catalog"
            )));
        }

        if gc.tints(Target::Eyebrows).is_empty() {
            return Err(FaceGenError::Validation(format!(
                "{g:?}: no eyebrow traits in catalog"
            )));
        }

        for category in required_head_parts {
            let present = gc
                .head_parts
                .get(category)
                .is_some_and(|parts| !parts.is_empty());
            if !present {
                return Err(FaceGenError::Validation(format!(
                    "{g:?}: required head part category {category:?} is empty"
                )));
            }
        }
    }

    Ok(())
}
