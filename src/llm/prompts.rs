//! Fixed instructional prompts, one per study mode.
//!
//! The document text is appended after the instructions, already truncated
//! to the prompt cap by the caller.

const QUIZ_INSTRUCTIONS: &str = "Based on the following document, create a quiz with 10 single-choice questions. \
For each question, provide exactly 4 options where only ONE is correct. \
Format the output as a JSON array with the following structure for each question: \
{\"question\": \"Question text\", \"options\": [\"option1\", \"option2\", \"option3\", \"option4\"], \"correctOption\": 0} \
where correctOption is the index (0-3) of the correct answer.";

const FLASHCARD_INSTRUCTIONS: &str = "Based on the following document, create exactly 10 flashcards with key concepts. \
Each flashcard should have a concise question on the front and a clear, informative answer on the back. \
Format the output as a JSON array with the following structure for each flashcard: \
{\"question\": \"Question text\", \"answer\": \"Answer text\"}";

const CHEATSHEET_INSTRUCTIONS: &str = "Create a comprehensive, well-structured cheatsheet based on the following document. \
IMPORTANT: Return the response in plain text only without any special characters or formatting. \
Format requirements: \
1. DO NOT use any markdown formatting \
2. DO NOT use hashtags (#) for headings \
3. DO NOT use asterisks (*) or hyphens (-) for bullet points \
4. DO NOT use underscores, backticks, or any other special characters \
5. Simply use numbers and letters for sections (e.g. '1.', 'a.', etc.) \
6. Use all CAPS for main section titles \
7. Use Title Case for subsection titles \
8. Leave a blank line between sections \
Include all key concepts, definitions, formulas, and critical information. \
Make it visually scannable with consistent organization using only plain text.";

pub fn quiz(document_text: &str) -> String {
    format!("{QUIZ_INSTRUCTIONS} Here's the document:\n\n{document_text}")
}

pub fn flashcards(document_text: &str) -> String {
    format!("{FLASHCARD_INSTRUCTIONS} Here's the document:\n\n{document_text}")
}

pub fn cheatsheet(document_text: &str) -> String {
    format!("{CHEATSHEET_INSTRUCTIONS} Here's the document:\n\n{document_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_document_text() {
        let doc = "photosynthesis notes";
        for prompt in [quiz(doc), flashcards(doc), cheatsheet(doc)] {
            assert!(prompt.ends_with("Here's the document:\n\nphotosynthesis notes"));
        }
    }

    #[test]
    fn test_quiz_prompt_describes_wire_structure() {
        let prompt = quiz("doc");
        assert!(prompt.contains("\"correctOption\": 0"));
        assert!(prompt.contains("10 single-choice questions"));
    }

    #[test]
    fn test_flashcard_prompt_asks_for_question_answer_pairs() {
        let prompt = flashcards("doc");
        assert!(prompt.contains("{\"question\": \"Question text\", \"answer\": \"Answer text\"}"));
    }

    #[test]
    fn test_cheatsheet_prompt_forbids_markdown() {
        let prompt = cheatsheet("doc");
        assert!(prompt.contains("DO NOT use any markdown formatting"));
    }
}
