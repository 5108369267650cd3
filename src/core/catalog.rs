//! The secrets this tool knows how to provision.

use crate::core::types::CatalogEntry;

const fn entry(name: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry { name, description }
}

/// Secrets uploaded by `sealdrop push`, in prompt order.
pub const CATALOG: &[CatalogEntry] = &[
    // Supabase
    entry(
        "NEXT_PUBLIC_SUPABASE_URL",
        "Supabase project URL (from Supabase Dashboard > Settings > API)",
    ),
    entry(
        "NEXT_PUBLIC_SUPABASE_ANON_KEY",
        "Supabase anonymous key (public, safe to expose)",
    ),
    entry(
        "SUPABASE_SERVICE_ROLE_KEY",
        "Supabase service role key (PRIVATE, admin access)",
    ),
    // Stripe
    entry(
        "STRIPE_SECRET_KEY",
        "Stripe secret key (from Stripe Dashboard > Developers > API keys)",
    ),
    entry(
        "NEXT_PUBLIC_STRIPE_PUBLISHABLE_KEY",
        "Stripe publishable key (public, safe to expose)",
    ),
    entry(
        "STRIPE_WEBHOOK_SECRET",
        "Stripe webhook signing secret (from Stripe Dashboard > Webhooks)",
    ),
    // Cloudflare
    entry(
        "CLOUDFLARE_API_TOKEN",
        "Cloudflare API token for Pages deployment",
    ),
    entry(
        "CLOUDFLARE_ACCOUNT_ID",
        "Cloudflare account ID (visible in R2 dashboard URL)",
    ),
    entry(
        "CLOUDFLARE_R2_ACCESS_KEY_ID",
        "R2 API access key ID (from R2 > Manage R2 API Tokens)",
    ),
    entry("CLOUDFLARE_R2_SECRET_ACCESS_KEY", "R2 API secret access key"),
    entry("CLOUDFLARE_R2_BUCKET_NAME", "R2 bucket name"),
    entry("CLOUDFLARE_R2_PUBLIC_URL", "R2 public URL or custom domain"),
    // Application
    entry(
        "NEXT_PUBLIC_APP_URL",
        "Your application URL (e.g., https://example.com)",
    ),
    // Optional integrations
    entry(
        "OPENAI_API_KEY",
        "OpenAI API key (optional, for AI features)",
    ),
    entry(
        "ANTHROPIC_API_KEY",
        "Anthropic API key (optional, for AI features)",
    ),
    entry("RESEND_API_KEY", "Resend API key (for email notifications)"),
];
