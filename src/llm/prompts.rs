/// Build the summary prompt wrapping the transcript verbatim.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        "Please provide a comprehensive summary of the following Teams transcript. \
Focus on the key points from each participant, main topics discussed, and important decisions or follow-up actions mentioned.\n\
\n\
Transcript:\n\
{transcript}\n\
\n\
Summary:"
    )
}
