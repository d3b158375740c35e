use clap::Parser;

// CLI argument structure. API keys come from the environment only, everything
// else can be set on the command line as well.
#[derive(Parser, Debug, Clone)]
#[command(name = "nutrition-gateway")]
#[command(about = "Backend relay for AI meal estimation and USDA food search")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 3000, env = "PORT")]
    pub port: u16,

    // OpenAI API key, required for the estimate endpoint.
    // Checked per request so the search endpoint still works without it.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    // USDA FoodData Central API key. DEMO_KEY works but is heavily throttled.
    #[arg(long, default_value = "DEMO_KEY", env = "USDA_API_KEY", hide_env_values = true)]
    pub usda_api_key: String,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 30)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,
}
