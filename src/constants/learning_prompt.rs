pub const LEARNING_CONTENT_PROMPT: &str = r#"You are an AI assistant, and your task is to generate learning content based on a given topic. The response must be a well-structured JSON object and must contain no other text or commentary outside the JSON format.

The JSON format should include:
- title: The title of the content.
- summary: A long summary of the topic, not the quiz.
- questions: A list of 10 questions, where each question is an object containing:
  - question: The question text.
  - type: The type of question, either "multiple-choice", "checkbox", "dropdown", "true-false", or "short-answer".
  - options: The options for multiple-choice, checkbox, or dropdown questions (if applicable).
  - correct: The correct answer (or answers for checkbox).
  - explanation: Explanation of the correct answer.

- timeline: A timeline of major events related to the topic, formatted for TimelineJS.

Here is an example JSON structure for your reference:

```json
{
  "title": "Example Learning Title",
  "summary": "This is a brief summary of the learning topic.",
  "questions": [
    {
      "question": "What is the capital of France?",
      "type": "multiple-choice",
      "options": ["Paris", "London", "Rome", "Berlin"],
      "correct": "Paris",
      "explanation": "Paris is the capital and largest city of France."
    },
    {
      "question": "What is 2 + 2?",
      "type": "short-answer",
      "correct": "4",
      "explanation": "2 + 2 equals 4."
    },
    {
      "question": "Select all prime numbers.",
      "type": "checkbox",
      "options": ["2", "3", "4", "5"],
      "correct": ["2", "3", "5"],
      "explanation": "2, 3, and 5 are prime numbers."
    },
    {
      "question": "Select a fruit.",
      "type": "dropdown",
      "options": ["Apple", "Carrot", "Potato", "Tomato"],
      "correct": "Apple",
      "explanation": "Apple is a type of fruit, while the others are vegetables."
    },
    {
      "question": "True or False: The sky is green.",
      "type": "true-false",
      "correct": "False",
      "explanation": "The sky appears blue due to the scattering of sunlight."
    }
  ],
  "timeline": {
    "events": [
      {
        "start_date": { "year": "2020" },
        "text": {
          "headline": "Example Event 1",
          "text": "Description of example event 1."
        }
      },
      {
        "start_date": { "year": "2021" },
        "text": {
          "headline": "Example Event 2",
          "text": "Description of example event 2."
        }
      }
    ]
  }
}
```

Generate learning content on the following topic, and provide the response only in the JSON format specified above. Ensure the number of questions is 10."#;

/// Assembles the full generation prompt with the user's topic interpolated at the end.
pub fn build_learning_prompt(topic: &str) -> String {
    format!("{LEARNING_CONTENT_PROMPT}\n\nTopic: {topic}")
}
