use crate::protocol::{BenchmarkCategory, BenchmarkModel, Provider};

// ── Row helpers ─────────────────────────────────────────────────────

fn elo(name: &str, provider: Provider, score: f64, rank: u32) -> BenchmarkModel {
    BenchmarkModel {
        rank: Some(rank),
        ..BenchmarkModel::new(name, provider, score)
    }
}

fn pct(name: &str, provider: Provider, score: f64, rank: u32) -> BenchmarkModel {
    BenchmarkModel {
        max_score: Some(100.0),
        unit: Some("%".to_string()),
        rank: Some(rank),
        ..BenchmarkModel::new(name, provider, score)
    }
}

/// Throughput row: `score` is an aggregate quality index, secondary is
/// tokens/sec, tertiary is the blended $/1M price.
fn perf(
    name: &str,
    provider: Provider,
    index: f64,
    tokens_per_sec: f64,
    input_price: f64,
    output_price: f64,
) -> BenchmarkModel {
    BenchmarkModel {
        max_score: Some(100.0),
        secondary_score: Some(tokens_per_sec),
        tertiary_score: Some(blended_price(input_price, output_price)),
        input_price: Some(input_price),
        output_price: Some(output_price),
        ..BenchmarkModel::new(name, provider, index)
    }
}

/// 3:1 input/output blend.
fn blended_price(input: f64, output: f64) -> f64 {
    ((input * 3.0 + output) / 4.0 * 100.0).round() / 100.0
}

fn category(id: &str, name: &str, description: &str, models: Vec<BenchmarkModel>) -> BenchmarkCategory {
    BenchmarkCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        models,
    }
}

// ── Built-in leaderboards ───────────────────────────────────────────

/// Returns the hardcoded leaderboards, in tab order.
pub fn builtin_categories() -> Vec<BenchmarkCategory> {
    use Provider::*;

    vec![
        category(
            "chatbot-arena",
            "Chatbot Arena (Elo)",
            "Human preference leaderboard based on 5.2M+ blind battles. The industry gold standard for general capability.",
            vec![
                elo("Gemini 3 Pro", Google, 1492.0, 1),
                elo("Grok 4.1 Thinking", XAi, 1482.0, 2),
                elo("GPT-5.2-high", OpenAI, 1475.0, 3),
                elo("Claude Opus 4.5", Anthropic, 1466.0, 4),
                elo("Gemini 3 Flash", Google, 1462.0, 5),
                elo("GPT-5.1", OpenAI, 1458.0, 6),
                elo("Claude Sonnet 4.5", Anthropic, 1452.0, 7),
                elo("Grok 4.1", XAi, 1448.0, 8),
                elo("o1-pro", OpenAI, 1440.0, 9),
                elo("Gemini 2.5 Pro", Google, 1432.0, 10),
            ],
        ),
        category(
            "livecodebench",
            "LiveCodeBench",
            "Holistic evaluation of coding capabilities using problems from LeetCode, AtCoder, and Codeforces.",
            vec![
                pct("o1-pro", OpenAI, 88.4, 1),
                pct("Claude Opus 4.5", Anthropic, 82.1, 2),
                pct("GPT-5.2", OpenAI, 81.5, 3),
                pct("Gemini 3 Pro", Google, 79.8, 4),
                pct("Claude Sonnet 4.5", Anthropic, 77.2, 5),
                pct("Grok 4.1 Thinking", XAi, 75.4, 6),
                pct("o1-mini", OpenAI, 74.1, 7),
            ],
        ),
        category(
            "gpqa-science",
            "GPQA (Science)",
            "Graduate-level Google-proof Q&A benchmark. Tests high-level scientific reasoning and domain expertise.",
            vec![
                pct("o1-pro", OpenAI, 78.2, 1),
                pct("Claude Opus 4.5", Anthropic, 74.5, 2),
                pct("Gemini 3 Deep Think", Google, 73.1, 3),
                pct("GPT-5.2", OpenAI, 71.8, 4),
                pct("Claude Sonnet 4.5", Anthropic, 68.9, 5),
                pct("Grok 4.1 Thinking", XAi, 65.2, 6),
            ],
        ),
        category(
            "ui-design2code",
            "Design2Code (UI)",
            "Measures high-fidelity conversion of website designs (screenshots) into functional HTML/CSS code.",
            vec![
                pct("Claude Sonnet 4.5", Anthropic, 94.2, 1),
                pct("GPT-5.2-high", OpenAI, 92.8, 2),
                pct("Gemini 3 Flash", Google, 91.5, 3),
                pct("Claude 3.7 Sonnet", Anthropic, 88.7, 4),
                pct("Grok 4-Fast", XAi, 85.0, 5),
            ],
        ),
        category(
            "swe-bench-verified",
            "SWE-bench Verified",
            "The most rigorous coding benchmark evaluating models on their ability to solve real GitHub issues.",
            vec![
                pct("Claude Opus 4.5", Anthropic, 82.4, 1),
                pct("o1-pro", OpenAI, 79.1, 2),
                pct("GPT-5.1 Codex Max", OpenAI, 77.9, 3),
                pct("Claude Sonnet 4.5", Anthropic, 77.2, 4),
                pct("Gemini 3 Pro", Google, 76.2, 5),
            ],
        ),
        // No ranks here: the table is unordered and falls back to position.
        category(
            "speed-price",
            "Speed & Price",
            "Aggregate intelligence index alongside output throughput (tokens/sec) and blended price per 1M tokens.",
            vec![
                perf("Gemini 3 Flash", Google, 71.0, 218.0, 0.5, 3.0),
                perf("Claude Opus 4.5", Anthropic, 70.0, 62.0, 5.0, 25.0),
                perf("GPT-5.1", OpenAI, 70.0, 104.0, 1.25, 10.0),
                perf("Gemini 3 Pro", Google, 73.0, 128.0, 2.0, 12.0),
                perf("Claude Sonnet 4.5", Anthropic, 63.0, 71.0, 3.0, 15.0),
                perf("Grok 4-Fast", XAi, 60.0, 190.0, 0.2, 0.5),
                perf("o1-mini", OpenAI, 54.0, 165.0, 1.1, 4.4),
            ],
        ),
    ]
}
