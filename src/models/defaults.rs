//! Hardcoded default portfolio content, used to seed the singleton document
//! the first time it is read.

use crate::models::portfolio::{
    Certificate, Experience, Name, Portfolio, Project, Skills, SocialLinks, UserInfo,
};

pub fn default_portfolio() -> Portfolio {
    let now = chrono::Utc::now().timestamp_millis();

    Portfolio {
        id: None,
        user_info: UserInfo {
            name: Name {
                first: "Maya".to_string(),
                last: "Fernandes".to_string(),
            },
            title: "Full Stack Developer".to_string(),
            about: "Full stack developer focused on clean APIs and fast, accessible \
                    web applications."
                .to_string(),
            social_links: SocialLinks {
                github: "https://github.com/mayafern".to_string(),
                linkedin: "https://linkedin.com/in/mayafern".to_string(),
                email: "hello@mayafern.dev".to_string(),
            },
            skills: Skills {
                languages: vec![
                    "Rust".to_string(),
                    "TypeScript".to_string(),
                    "JavaScript (ES6+)".to_string(),
                    "Python".to_string(),
                    "SQL".to_string(),
                ],
                frameworks: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "Express".to_string(),
                    "Actix Web".to_string(),
                ],
                tools: vec![
                    "Git".to_string(),
                    "GitHub".to_string(),
                    "MongoDB".to_string(),
                    "PostgreSQL".to_string(),
                    "Docker".to_string(),
                ],
                other: vec![
                    "RESTful APIs".to_string(),
                    "Data Structures".to_string(),
                    "Responsive Design".to_string(),
                ],
            },
            typewriter_strings: vec![
                "Full Stack Developer".to_string(),
                "Web Developer".to_string(),
                "Open Source Contributor".to_string(),
                "Problem Solver".to_string(),
            ],
        },
        projects: vec![
            Project {
                id: "ledgerlite".to_string(),
                title: "LedgerLite – Personal Finance Tracker".to_string(),
                description: "A full-stack finance tracker that helps users analyze \
                              spending patterns and plan budgets."
                    .to_string(),
                tech_stack: vec![
                    "MongoDB".to_string(),
                    "Express.js".to_string(),
                    "React.js".to_string(),
                    "Node.js".to_string(),
                    "REST APIs".to_string(),
                ],
                github_url: "https://github.com/mayafern/ledgerlite".to_string(),
                demo_url: Some("https://ledgerlite.mayafern.dev".to_string()),
                image: Some(
                    "https://images.unsplash.com/photo-1554224155-6726b3ff858f?auto=format&fit=crop&q=80"
                        .to_string(),
                ),
            },
            Project {
                id: "wellfound".to_string(),
                title: "WellFound – Community Health Portal".to_string(),
                description: "Healthcare accessibility platform connecting users with \
                              local medical resources and services."
                    .to_string(),
                tech_stack: vec![
                    "MERN Stack".to_string(),
                    "JWT Auth".to_string(),
                    "RESTful API".to_string(),
                ],
                github_url: "https://github.com/mayafern/wellfound".to_string(),
                demo_url: Some("https://wellfound.mayafern.dev".to_string()),
                image: Some(
                    "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?auto=format&fit=crop&q=80"
                        .to_string(),
                ),
            },
            Project {
                id: "notedown".to_string(),
                title: "Notedown".to_string(),
                description: "Markdown-first note taking web app with offline support."
                    .to_string(),
                tech_stack: vec![
                    "React.js".to_string(),
                    "Node.js".to_string(),
                    "MongoDB".to_string(),
                ],
                github_url: "https://github.com/mayafern/notedown".to_string(),
                demo_url: Some("https://notedown.mayafern.dev".to_string()),
                image: Some(
                    "https://images.unsplash.com/photo-1517842645767-c639042777db?auto=format&fit=crop&q=80"
                        .to_string(),
                ),
            },
        ],
        experiences: vec![Experience {
            id: "polyglot-labs".to_string(),
            company: "Polyglot Labs".to_string(),
            position: "Software Engineering Intern".to_string(),
            duration: "June 2024 - September 2024".to_string(),
            description: vec![
                "Built internal dashboards used by three product teams".to_string(),
                "Implemented frontend and backend integration for the billing service"
                    .to_string(),
                "Cut page load times by 40% through query and bundle optimization"
                    .to_string(),
            ],
            tech_stack: vec![
                "React.js".to_string(),
                "Node.js".to_string(),
                "PostgreSQL".to_string(),
                "RESTful APIs".to_string(),
            ],
        }],
        certificates: vec![
            Certificate {
                id: "cert-networks".to_string(),
                title: "Computer Networks".to_string(),
                issuer: "IIT Madras - NPTEL".to_string(),
                date: "October 2024".to_string(),
                url: "https://nptel.ac.in/certificates/cert-networks".to_string(),
            },
            Certificate {
                id: "cert-dataviz".to_string(),
                title: "Data Visualization".to_string(),
                issuer: "Tata - Forage".to_string(),
                date: "July 2024".to_string(),
                url: "https://www.theforage.com/certificates/cert-dataviz".to_string(),
            },
            Certificate {
                id: "cert-genai".to_string(),
                title: "Introduction to Generative AI".to_string(),
                issuer: "Google Cloud - Coursera".to_string(),
                date: "January 2024".to_string(),
                url: "https://www.coursera.org/verify/cert-genai".to_string(),
            },
        ],
        created_at: Some(now),
        updated_at: Some(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_is_complete() {
        let portfolio = default_portfolio();
        assert!(!portfolio.user_info.title.is_empty());
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.experiences.len(), 1);
        assert_eq!(portfolio.certificates.len(), 3);
        assert!(portfolio.projects.iter().all(|p| !p.id.is_empty()));
    }
}
