use crate::slide::Slide;

// (quote, author)
const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "After my knee surgery I could barely walk. Six weeks of aquatic therapy later I was back on my bike.",
        "Daniel R.",
    ),
    (
        "The staff treated me like family. The warm pool sessions did more for my back than years of pills.",
        "Maria L.",
    ),
    (
        "I was nervous about the water, but the therapists went at my pace. Where water heals is not just a slogan.",
        "Ahmed K.",
    ),
    (
        "Our son's coordination improved so much that his teachers noticed before we told them about the program.",
        "The Okafor family",
    ),
];

pub fn builtin_slides() -> Vec<Slide> {
    TESTIMONIALS.iter().map(|(text, author)| Slide::quote(text, author)).collect()
}
