pub const FORMAT_INSTRUCTIONS_SLOT: &str = "{format_instructions}";
pub const TRANSCRIPT_SLOT: &str = "{transcript}";

pub const QUIZ_GENERATION_TEMPLATE: &str = "You are an expert educator. Your goal is to create a quiz based on the provided video transcript.

Instructions:
1. Analyze the transcript below.
2. Create a quiz with exactly 5 multiple-choice questions, each with exactly 4 answer options.
3. Ensure the questions test understanding of the key concepts.
4. {format_instructions}

Transcript:
{transcript}
";

pub const FORMAT_INSTRUCTIONS_PREAMBLE: &str = "The output should be formatted as a JSON instance that conforms to the JSON schema below.

As an example, for the schema {\"properties\": {\"foo\": {\"title\": \"Foo\", \"description\": \"a list of strings\", \"type\": \"array\", \"items\": {\"type\": \"string\"}}}, \"required\": [\"foo\"]}
the object {\"foo\": [\"bar\", \"baz\"]} is a well-formatted instance of the schema. The object {\"properties\": {\"foo\": [\"bar\", \"baz\"]}} is not well-formatted.

Respond with the JSON object only, without any prose before or after it.

Here is the output schema:
```
";

pub const FORMAT_INSTRUCTIONS_EPILOGUE: &str = "
```";
