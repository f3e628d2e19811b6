// Externally hosted assets. Everything the site embeds from another origin
// lives here so no page hard-codes a foreign URL.

pub fn interactive_background_url() -> &'static str {
    "https://maskaworld.org/background.html"
}

pub fn not_found_background_url() -> &'static str {
    "https://maskaworld.org/404.html"
}

pub fn splash_audio_url() -> &'static str {
    "https://assets.mixkit.co/sfx/preview/mixkit-cinematic-transition-sweep-495.mp3"
}
