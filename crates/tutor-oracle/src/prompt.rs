//! Prompt construction for each oracle call.
//!
//! Every prompt ends by describing the exact JSON object expected back; the
//! shapes mirror the deserialisers in [`tutor_core::material`].

use tutor_core::{
  TaxonomyLevel,
  oracle::{AssessRequest, ConverseRequest, HandwritingRequest, MaterialRequest},
};

use crate::chat::{Content, ContentPart, ImageUrl, Message, Role};

/// A prepared call: messages plus sampling parameters.
#[derive(Debug)]
pub(crate) struct Prompt {
  pub messages:    Vec<Message>,
  pub temperature: f32,
  pub max_tokens:  Option<u32>,
}

fn level_list() -> String {
  TaxonomyLevel::ALL
    .iter()
    .map(|l| l.as_str())
    .collect::<Vec<_>>()
    .join(", ")
}

// ─── Study material ──────────────────────────────────────────────────────────

const MATERIAL_SYSTEM: &str = "You are an experienced K-12 teacher who writes \
  thorough study guides organised around Bloom's Taxonomy. A student should be \
  able to learn the whole topic from your guide. Reply with a single valid \
  JSON object and nothing else.";

pub(crate) fn study_material(req: &MaterialRequest) -> Prompt {
  let MaterialRequest { grade, subject, topic } = req;
  let levels = level_list();

  let user = format!(
    "Write a detailed study guide for a grade {grade} student.
Subject: {subject}
Topic: {topic}

The guide needs:
- an introduction of two or three paragraphs on what the topic is and why it matters
- five to eight key concepts, each with a short explanation and a grade {grade} example
- a detailed explanation broken into sections, in plain language, with real-world examples and any formulas or rules that apply
- two or three worked examples with step-by-step solutions
- five to ten important terms with definitions
- three to five common mistakes and how to avoid them
- practical tips for mastering the topic
- a short summary

Then write six practice questions with detailed solutions, exactly one per Bloom's level: {levels}.

Reply with this JSON shape:
{{
  \"studyGuide\": {{
    \"introduction\": \"...\",
    \"keyConcepts\": [\"...\"],
    \"detailedExplanation\": \"...\",
    \"examples\": [\"...\"],
    \"importantTerms\": [{{\"term\": \"...\", \"definition\": \"...\"}}],
    \"commonMistakes\": [\"...\"],
    \"tipsAndTricks\": [\"...\"],
    \"summary\": \"...\"
  }},
  \"questions\": [
    {{\"bloomLevel\": \"Remember\", \"question\": \"...\", \"solution\": \"...\", \"hint\": \"...\"}}
  ]
}}"
  );

  Prompt {
    messages:    vec![
      Message::text(Role::System, MATERIAL_SYSTEM),
      Message::text(Role::User, user),
    ],
    temperature: 0.7,
    max_tokens:  Some(4000),
  }
}

// ─── Tutoring turn ───────────────────────────────────────────────────────────

pub(crate) fn converse(req: &ConverseRequest) -> Prompt {
  let ConverseRequest { grade, subject, topic, context } = req;
  let current = context.current_level;
  let candidate = context.candidate_level;
  let progression = if current.is_terminal() {
    format!("{current} is the highest level; keep deepening the student's work here.")
  } else {
    format!("When the student shows mastery, move on to {candidate}.")
  };

  let system = format!(
    "You are a patient, encouraging tutor working with a grade {grade} student \
on {subject}: {topic}.

The current Bloom's Taxonomy level is {current}. Ask questions and set tasks at \
this level. {progression}

Always label each question or task with its Bloom's level, offer a hint before \
revealing an answer, praise effort and progress, and pitch the difficulty for \
grade {grade}.

Reply with this JSON shape:
{{
  \"message\": \"your reply to the student\",
  \"bloomLevel\": \"{current}\",
  \"suggestNextLevel\": false,
  \"feedback\": \"encouraging feedback on their learning\"
}}
Set suggestNextLevel to true only when the student has mastered {current}."
  );

  let mut messages = Vec::with_capacity(context.history.len() + 1);
  messages.push(Message::text(Role::System, system));
  messages.extend(context.history.iter().map(|turn| {
    let role = if turn.is_user { Role::User } else { Role::Assistant };
    Message::text(role, turn.message.clone())
  }));

  Prompt { messages, temperature: 0.8, max_tokens: None }
}

// ─── Assessment ──────────────────────────────────────────────────────────────

const ASSESS_SYSTEM: &str = "You are an experienced teacher marking student \
  answers against Bloom's Taxonomy criteria. Be fair and encouraging. Reply \
  with a single valid JSON object and nothing else.";

const ASSESSMENT_SHAPE: &str = "{
  \"score\": 0-100,
  \"feedback\": \"constructive feedback\",
  \"strengths\": \"what the student did well\",
  \"improvements\": \"what to work on next\"
}";

pub(crate) fn assess(req: &AssessRequest) -> Prompt {
  let AssessRequest { question, answer, level } = req;

  let user = format!(
    "Mark this answer to a {level}-level question.

Question: {question}
Student answer: {answer}

Give a score from 0 to 100 and constructive feedback.

Reply with this JSON shape:
{ASSESSMENT_SHAPE}"
  );

  Prompt {
    messages:    vec![
      Message::text(Role::System, ASSESS_SYSTEM),
      Message::text(Role::User, user),
    ],
    temperature: 0.5,
    max_tokens:  None,
  }
}

pub(crate) fn assess_handwriting(req: &HandwritingRequest) -> Prompt {
  let HandwritingRequest { image, question, level, typed_answer } = req;

  let typed = typed_answer
    .as_deref()
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(|t| format!("\nThe student also typed: {t}\n"))
    .unwrap_or_default();

  let text = format!(
    "The image shows a student's handwritten answer to a {level}-level question.

Question: {question}
{typed}
First transcribe the handwriting exactly as written. Then mark the answer with \
a score from 0 to 100 and constructive feedback.

Reply with this JSON shape:
{{
  \"recognizedText\": \"the transcribed answer\",
  \"score\": 0-100,
  \"feedback\": \"constructive feedback\",
  \"strengths\": \"what the student did well\",
  \"improvements\": \"what to work on next\"
}}"
  );

  let user = Message {
    role:    Role::User,
    content: Content::Parts(vec![
      ContentPart::Text { text },
      ContentPart::ImageUrl {
        image_url: ImageUrl { url: image.as_url().to_owned() },
      },
    ]),
  };

  Prompt {
    messages:    vec![Message::text(Role::System, ASSESS_SYSTEM), user],
    temperature: 0.3,
    max_tokens:  Some(1500),
  }
}

// ─── Response text ───────────────────────────────────────────────────────────

/// Strip a surrounding markdown code fence (```` ```json ... ``` ````) if the
/// model added one despite being asked for bare JSON.
pub fn strip_markdown_json(content: &str) -> &str {
  let trimmed = content.trim();
  let Some(inner) = trimmed
    .strip_prefix("```")
    .and_then(|rest| rest.strip_suffix("```"))
  else {
    return trimmed;
  };

  // Drop the info string (`json`) on the opening fence line.
  match inner.split_once('\n') {
    Some((_, body)) => body.trim(),
    None => inner.trim(),
  }
}

#[cfg(test)]
mod tests {
  use tutor_core::{
    conversation::{ConversationTurn, TurnContext},
    oracle::ImageData,
  };

  use super::*;

  fn turn(seq: u64, is_user: bool, message: &str) -> ConversationTurn {
    ConversationTurn {
      turn_id: uuid::Uuid::from_u128(u128::from(seq)),
      user_id: 1,
      session_id: "s".into(),
      seq,
      message: message.into(),
      is_user,
      level: TaxonomyLevel::Understand,
      created_at: chrono::Utc::now(),
    }
  }

  #[test]
  fn strips_json_fence() {
    assert_eq!(strip_markdown_json("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    assert_eq!(strip_markdown_json("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    assert_eq!(strip_markdown_json("  {\"a\": 1}  \n"), "{\"a\": 1}");
  }

  #[test]
  fn converse_maps_history_to_roles() {
    let ctx = TurnContext::new(
      vec![turn(1, true, "what is a noun?"), turn(2, false, "Good question!")],
      TaxonomyLevel::Understand,
    );
    let prompt = converse(&ConverseRequest {
      grade:   "3".into(),
      subject: "English".into(),
      topic:   "Nouns".into(),
      context: ctx,
    });

    let roles: Vec<_> = prompt.messages.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);

    let Content::Text(system) = &prompt.messages[0].content else {
      panic!("system prompt should be plain text");
    };
    assert!(system.contains("level is Understand"));
    assert!(system.contains("move on to Apply"));
  }

  #[test]
  fn converse_at_create_does_not_offer_a_higher_level() {
    let prompt = converse(&ConverseRequest {
      grade:   "12".into(),
      subject: "English".into(),
      topic:   "Rhetoric".into(),
      context: TurnContext::new(Vec::new(), TaxonomyLevel::Create),
    });
    let Content::Text(system) = &prompt.messages[0].content else {
      panic!("system prompt should be plain text");
    };
    assert!(system.contains("Create is the highest level"));
    assert!(!system.contains("move on to"));
  }

  #[test]
  fn handwriting_prompt_carries_image_and_typed_answer() {
    let prompt = assess_handwriting(&HandwritingRequest {
      image:        ImageData::parse("data:image/png;base64,aGVsbG8=").unwrap(),
      question:     "Solve 2 + 2".into(),
      level:        TaxonomyLevel::Apply,
      typed_answer: Some("four".into()),
    });

    let json = serde_json::to_value(&prompt.messages[1]).unwrap();
    assert_eq!(json["role"], "user");
    assert_eq!(json["content"][0]["type"], "text");
    assert!(
      json["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("The student also typed: four")
    );
    assert_eq!(json["content"][1]["type"], "image_url");
    assert_eq!(
      json["content"][1]["image_url"]["url"],
      "data:image/png;base64,aGVsbG8="
    );
  }

  #[test]
  fn material_prompt_names_every_level() {
    let prompt = study_material(&MaterialRequest {
      grade:   "5".into(),
      subject: "History".into(),
      topic:   "Ancient Civilizations".into(),
    });
    let Content::Text(user) = &prompt.messages[1].content else {
      panic!("user prompt should be plain text");
    };
    for level in TaxonomyLevel::ALL {
      assert!(user.contains(level.as_str()));
    }
    assert_eq!(prompt.max_tokens, Some(4000));
  }
}
