//! Fashion recommendation generation.
//!
//! Deterministic tables over the closed (gender, occasion, budget) domain,
//! keyed off whichever analysis facts are present. Pure and total: identical
//! inputs always produce identical output, and the enums make an unhandled
//! combination a compile error instead of a silent fallthrough.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::body_shape::BodyShape;
use crate::colors::ColorPalette;
use crate::face_shape::FaceShape;
use crate::skin_tone::SkinTone;

/// User gender context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Occasion the user is dressing for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Daily,
    Party,
    Interview,
    Wedding,
}

/// Budget tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

/// User context supplied alongside the photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationContext {
    pub gender: Gender,
    pub occasion: Occasion,
    pub budget: Budget,
}

/// Analysis facts the generator keys off. Every field is optional; a
/// rationale line is appended only when its fact is present.
#[derive(Clone, Debug, Default)]
pub struct AnalysisFacts {
    pub body_shape: Option<BodyShape>,
    pub face_shape: Option<FaceShape>,
    pub skin_tone: Option<SkinTone>,
    pub palette: Option<ColorPalette>,
}

/// Structured recommendation output. All sequences are ordered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub outfits: Vec<String>,
    pub hairstyles: Vec<String>,
    pub accessories: Vec<String>,
    pub colors: Vec<String>,
    pub best_outfit: String,
    pub rationale: Vec<String>,
}

/// The single best outfit for a (gender, occasion) pair.
fn best_outfit(gender: Gender, occasion: Occasion) -> &'static str {
    match (gender, occasion) {
        (Gender::Female, Occasion::Wedding) => "Embroidered Anarkali with statement dupatta",
        (Gender::Female, Occasion::Interview) => {
            "Tailored blazer with pencil skirt and neutral pumps"
        }
        (Gender::Female, Occasion::Party) => "Satin midi dress with sleek heels",
        (Gender::Female, Occasion::Daily) => "Knit top with high-waist jeans and white sneakers",
        (Gender::Male, Occasion::Wedding) => "Classic kurta with Nehru jacket and straight trousers",
        (Gender::Male, Occasion::Interview) => "Navy blazer with crisp shirt and tapered chinos",
        (Gender::Male, Occasion::Party) => "Statement bomber with dark slim-fit jeans",
        (Gender::Male, Occasion::Daily) => "Oxford shirt with relaxed chinos and loafers",
        (Gender::Other, Occasion::Wedding) => "Structured ethnic set with layered stole",
        (Gender::Other, Occasion::Interview) => "Minimal blazer with straight-leg trousers",
        (Gender::Other, Occasion::Party) => "Monochrome co-ord set with bold sneakers",
        (Gender::Other, Occasion::Daily) => "Relaxed overshirt with tapered pants",
    }
}

/// Rationale lines, tested independently in a fixed order: body shape, face
/// shape, skin tone, budget. Non-exclusive; several lines may append.
fn rationale(context: &RecommendationContext, facts: &AnalysisFacts) -> Vec<String> {
    let mut lines: Vec<&str> = Vec::new();

    match facts.body_shape {
        Some(BodyShape::InvertedTriangle) => {
            lines.push("Balance shoulders with straight-leg or wide-leg bottoms.");
        }
        Some(BodyShape::Triangle) => {
            lines.push("Add structure on top and keep the lower half streamlined.");
        }
        Some(BodyShape::Rectangle) => {
            lines.push("Create shape with layered tailoring and waist definition.");
        }
        _ => {}
    }

    match facts.face_shape {
        Some(FaceShape::Round) => lines.push("Prefer V-necks to elongate the neckline."),
        Some(FaceShape::Square) => lines.push("Softer necklines help balance angular features."),
        Some(FaceShape::Heart) => lines.push("Boat or scoop necklines balance wider foreheads."),
        _ => {}
    }

    match facts.skin_tone {
        Some(SkinTone::Light) => lines.push("Pastels and cool tones will lift your complexion."),
        Some(SkinTone::Deep) => lines.push("Rich jewel tones enhance contrast beautifully."),
        _ => {}
    }

    match context.budget {
        Budget::Low => lines.push("Focus on cotton blends and smart layering for value."),
        Budget::High => lines.push("Premium fabrics like wool or silk elevate the look."),
        Budget::Medium => {}
    }

    lines.into_iter().map(str::to_string).collect()
}

/// Generate recommendations for a context and set of analysis facts.
pub fn generate(context: &RecommendationContext, facts: &AnalysisFacts) -> RecommendationSet {
    let mut outfits: Vec<&str> = Vec::new();
    let mut hairstyles: Vec<&str> = Vec::new();
    let mut accessories: Vec<&str> = Vec::new();
    let mut colors: Vec<&str> = Vec::new();

    match context.occasion {
        Occasion::Wedding => {
            outfits.extend(["Elegant traditional attire", "Embroidered ethnic wear"]);
            accessories.extend(["Statement jewelry", "Classic watch"]);
        }
        Occasion::Interview => {
            outfits.extend(["Tailored blazer", "Neutral formal trousers"]);
            accessories.extend(["Minimalist belt", "Leather shoes"]);
        }
        Occasion::Party => {
            outfits.extend(["Bold statement jacket", "Slim-fit jeans"]);
            accessories.extend(["Layered chains", "Stylish sneakers"]);
        }
        Occasion::Daily => {
            outfits.extend(["Smart casual shirt", "Comfortable chinos"]);
            accessories.extend(["Everyday watch", "Sunglasses"]);
        }
    }

    match context.gender {
        Gender::Female => {
            hairstyles.extend(["Soft waves", "Textured bob"]);
            outfits.extend(["A-line dress", "High-waisted trousers"]);
        }
        Gender::Male | Gender::Other => {
            hairstyles.extend(["Classic fade", "Textured quiff"]);
            outfits.extend(["Structured jacket", "Crisp button-down"]);
        }
    }

    match context.budget {
        Budget::Low => {
            outfits.push("Basic tees with layered styling");
            colors.extend(["Navy", "White", "Grey"]);
        }
        Budget::High => {
            outfits.push("Designer statement pieces");
            colors.extend(["Emerald", "Burgundy", "Ivory"]);
        }
        Budget::Medium => {
            outfits.push("Mid-range versatile essentials");
            colors.extend(["Olive", "Beige", "Charcoal"]);
        }
    }

    // A supplied palette fully overrides the budget-tier defaults.
    let colors = match &facts.palette {
        Some(palette) if !palette.is_empty() => palette.to_vec(),
        _ => colors.into_iter().map(str::to_string).collect(),
    };

    RecommendationSet {
        outfits: outfits.into_iter().map(str::to_string).collect(),
        hairstyles: hairstyles.into_iter().map(str::to_string).collect(),
        accessories: accessories.into_iter().map(str::to_string).collect(),
        colors,
        best_outfit: best_outfit(context.gender, context.occasion).to_string(),
        rationale: rationale(context, facts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::palette_for;
    use crate::skin_tone::Undertone;

    fn context(gender: Gender, occasion: Occasion, budget: Budget) -> RecommendationContext {
        RecommendationContext {
            gender,
            occasion,
            budget,
        }
    }

    #[test]
    fn wedding_guest_gets_full_rationale_in_order() {
        let ctx = context(Gender::Male, Occasion::Wedding, Budget::High);
        let facts = AnalysisFacts {
            body_shape: Some(BodyShape::InvertedTriangle),
            face_shape: Some(FaceShape::Round),
            skin_tone: Some(SkinTone::Deep),
            palette: None,
        };

        let set = generate(&ctx, &facts);

        assert_eq!(
            set.best_outfit,
            "Classic kurta with Nehru jacket and straight trousers"
        );
        assert_eq!(
            set.rationale,
            vec![
                "Balance shoulders with straight-leg or wide-leg bottoms.",
                "Prefer V-necks to elongate the neckline.",
                "Rich jewel tones enhance contrast beautifully.",
                "Premium fabrics like wool or silk elevate the look.",
            ]
        );
    }

    #[test]
    fn generation_is_pure() {
        let ctx = context(Gender::Female, Occasion::Party, Budget::Low);
        let facts = AnalysisFacts {
            body_shape: Some(BodyShape::Triangle),
            face_shape: Some(FaceShape::Heart),
            skin_tone: Some(SkinTone::Light),
            palette: Some(palette_for(SkinTone::Light, Undertone::Cool)),
        };

        assert_eq!(generate(&ctx, &facts), generate(&ctx, &facts));
    }

    #[test]
    fn palette_overrides_budget_colors() {
        let ctx = context(Gender::Other, Occasion::Daily, Budget::Medium);
        let palette = palette_for(SkinTone::Fair, Undertone::Warm);
        let facts = AnalysisFacts {
            palette: Some(palette.clone()),
            ..AnalysisFacts::default()
        };

        let set = generate(&ctx, &facts);
        assert_eq!(set.colors, palette.to_vec());
    }

    #[test]
    fn budget_colors_apply_without_palette() {
        let ctx = context(Gender::Other, Occasion::Daily, Budget::Medium);
        let set = generate(&ctx, &AnalysisFacts::default());
        assert_eq!(set.colors, ["Olive", "Beige", "Charcoal"]);
    }

    #[test]
    fn absent_facts_append_no_rationale() {
        let ctx = context(Gender::Female, Occasion::Interview, Budget::Medium);
        let set = generate(&ctx, &AnalysisFacts::default());
        assert!(set.rationale.is_empty());
    }

    #[test]
    fn occasion_and_gender_items_assemble_in_order() {
        let ctx = context(Gender::Female, Occasion::Interview, Budget::Low);
        let set = generate(&ctx, &AnalysisFacts::default());

        assert_eq!(
            set.outfits,
            vec![
                "Tailored blazer",
                "Neutral formal trousers",
                "A-line dress",
                "High-waisted trousers",
                "Basic tees with layered styling",
            ]
        );
        assert_eq!(set.hairstyles, vec!["Soft waves", "Textured bob"]);
        assert_eq!(set.accessories, vec!["Minimalist belt", "Leather shoes"]);
    }

    #[test]
    fn trapezoid_and_oval_bodies_have_no_dedicated_line() {
        let ctx = context(Gender::Male, Occasion::Daily, Budget::Medium);
        for shape in [BodyShape::Trapezoid, BodyShape::Oval] {
            let facts = AnalysisFacts {
                body_shape: Some(shape),
                ..AnalysisFacts::default()
            };
            assert!(generate(&ctx, &facts).rationale.is_empty());
        }
    }
}
