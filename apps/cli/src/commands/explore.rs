/// Static health facts and everyday tips.
const HEALTH_FACTS: &[&str] = &[
    "Drinking enough water can boost your metabolism and energy levels.",
    "Regular physical activity reduces the risk of chronic diseases.",
    "A balanced diet includes a variety of fruits and vegetables.",
    "Quality sleep is essential for mental and physical health.",
    "Managing stress is important for overall well-being.",
];

const EVERYDAY_TIPS: &[&str] = &[
    "Start your day with a healthy breakfast.",
    "Take short walks during work breaks.",
    "Stay hydrated throughout the day.",
    "Limit processed foods and added sugars.",
    "Practice mindfulness or meditation for a few minutes daily.",
];

pub fn show() {
    println!("Health Facts");
    for fact in HEALTH_FACTS {
        println!("- {fact}");
    }
    println!();
    println!("Everyday Tips");
    for tip in EVERYDAY_TIPS {
        println!("- {tip}");
    }
}
