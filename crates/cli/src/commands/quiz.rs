//! Product-finder quiz.

use herbal_store_storefront::cart::KeyValueStore;
use herbal_store_storefront::error::AppError;
use herbal_store_storefront::quiz::{Goal, QuizStep};
use herbal_store_storefront::state::Storefront;

use crate::render;

/// Answer all three questions in order and print the recommendation.
pub fn run<S: KeyValueStore>(
    storefront: &mut Storefront<S>,
    goal: String,
    format: String,
    experience: String,
) -> Result<(), AppError> {
    goal.parse::<Goal>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let session = storefront.quiz_mut();
    session.start();
    for answer in [goal, format, experience] {
        if let QuizStep::Complete(answers) = session.select(answer) {
            tracing::debug!(answers = answers.len(), "quiz complete");
        }
    }

    let product = storefront
        .recommend()
        .ok_or_else(|| AppError::NotFound("no products to recommend".to_string()))?;

    println!("We recommend:\n");
    println!("{}", render::product_row(product));
    println!("\nAdd it with: herbal cart add {}", product.id);
    Ok(())
}
