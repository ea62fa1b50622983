// src/session.rs
//! The one piece of durable client memory: the extracted resume text.

pub const SAMPLE_RESUME: &str = "John Doe - Software Engineer

Experience:
• 3+ years of Python development
• Proficient in JavaScript, React, and Node.js
• Experience with SQL databases (MySQL, PostgreSQL)
• Familiar with AWS cloud services
• Docker and containerization experience
• Git version control and CI/CD pipelines
• REST API development and testing
• Agile methodology and Scrum

Education:
Bachelor of Science in Computer Science

Skills:
Python, JavaScript, React, Node.js, SQL, AWS, Docker, Git, HTML, CSS, REST APIs, Agile, Scrum";

pub const SAMPLE_JOB_DESCRIPTION: &str = "We are looking for a Senior Software Engineer to join our team.

Requirements:
- 5+ years of experience in software development
- Strong proficiency in Python and JavaScript
- Experience with React and Node.js frameworks
- Knowledge of SQL and NoSQL databases
- Familiarity with cloud platforms (AWS, Azure)
- Experience with Docker and Kubernetes
- Git version control and CI/CD pipelines
- Understanding of microservices architecture
- Knowledge of machine learning concepts
- Experience with testing frameworks
- Agile/Scrum methodology experience

Nice to have:
- TensorFlow or PyTorch experience
- DevOps experience
- GraphQL knowledge";

/// Resume text for the lifetime of one session. Starts empty, can only be
/// replaced wholesale, never cleared.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    resume_text: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    pub fn has_resume(&self) -> bool {
        !self.resume_text.is_empty()
    }

    pub(crate) fn set_from_upload(&mut self, text: String) {
        self.resume_text = text;
    }

    pub(crate) fn load_sample(&mut self) {
        self.resume_text = SAMPLE_RESUME.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let session = SessionState::new();
        assert!(!session.has_resume());
        assert_eq!(session.resume_text(), "");
    }

    #[test]
    fn sample_is_literal() {
        let mut session = SessionState::new();
        session.load_sample();
        assert_eq!(session.resume_text(), SAMPLE_RESUME);
        assert!(session.has_resume());
    }

    #[test]
    fn upload_replaces_whole_text() {
        let mut session = SessionState::new();
        session.load_sample();
        session.set_from_upload("Jane Roe - Data Scientist".to_string());
        assert_eq!(session.resume_text(), "Jane Roe - Data Scientist");
    }
}
