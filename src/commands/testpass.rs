use anyhow::Result;

use crate::strength;

pub fn test_password(password: &str) -> Result<()> {
    let assessment = strength::assess_password(password);
    println!(
        "Password strength: {} (score: {}/4)",
        assessment.rating, assessment.score
    );
    println!("Estimated guesses: 10^{:.1}", assessment.guesses_log10);
    if !assessment.suggestions.is_empty() {
        println!("Suggestions: {}", assessment.suggestions.join(" "));
    }
    Ok(())
}
