use crate::profile::Profile;

/// Placeholder rendered in the routing context when retrieval found nothing.
pub const EMPTY_NOTES_PLACEHOLDER: &str = "None";

const ROUTER_INSTRUCTION: &str = "\
You are an expert decision maker.

You are given:
- The user's profile
- Their personal fitness notes
- Their current question

Decide whether you have enough information to answer without web search.

If insufficient, reply with exactly USE_WEB, else reply with exactly NO_WEB.";

const ANSWER_INSTRUCTION: &str =
	"You are a helpful fitness coach. Answer the user query in under 120 words.";

/// The context block shared by the routing step: profile lines, retrieved
/// note texts (or the `None` placeholder), and the question.
pub fn context_block(profile: &Profile, notes: &[String], question: &str) -> String {
	let notes_section =
		if notes.is_empty() { EMPTY_NOTES_PLACEHOLDER.to_string() } else { notes.join("\n") };

	format!(
		"User Profile:\n{}\n\nNotes:\n{}\n\nQuestion:\n{}",
		profile.render_lines(),
		notes_section,
		question
	)
}

pub fn router_prompt(context: &str) -> String {
	format!("{ROUTER_INSTRUCTION}\n\n{context}")
}

/// The generation prompt. `web_info` is the empty string when the web step
/// was skipped; the section is emitted either way so the template stays
/// stable across both paths.
pub fn answer_prompt(profile: &Profile, notes: &[String], web_info: &str, question: &str) -> String {
	format!(
		"{ANSWER_INSTRUCTION}\n\nProfile:\n{}\n\nNotes:\n{}\n\nWeb Info:\n{}\n\nQuestion:\n{}",
		profile.render_lines(),
		notes.join("\n"),
		web_info,
		question
	)
}

/// Char-boundary-safe preview for the note browse screen.
pub fn note_preview(text: &str, max_chars: usize) -> String {
	if text.chars().count() <= max_chars {
		return text.to_string();
	}

	let mut out: String = text.chars().take(max_chars).collect();

	out.push_str("...");

	out
}
