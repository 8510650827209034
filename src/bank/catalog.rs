//! Built-in sample question bank.
//!
//! Each course has five topics and five question templates. Question `i`
//! takes topic `i % 5`, level `i % 5 + 1`, and template `i % 5`, giving 25
//! questions per course.

use super::{Course, Level, Question};

const QUESTIONS_PER_COURSE: usize = 25;

type Template = (&'static str, [&'static str; 4], u8);

struct CourseTemplate {
    course: Course,
    topics: [&'static str; 5],
    questions: [Template; 5],
}

const TEMPLATES: [CourseTemplate; 4] = [
    CourseTemplate {
        course: Course::DataScience,
        topics: [
            "Statistics",
            "Python",
            "Data Visualization",
            "Machine Learning",
            "Probability",
        ],
        questions: [
            (
                "What is the mean of a dataset?",
                ["Average", "Median", "Mode", "Range"],
                0,
            ),
            (
                "Which library is used for data manipulation in Python?",
                ["NumPy", "Pandas", "Matplotlib", "Scikit-learn"],
                1,
            ),
            (
                "What does PDF stand for in statistics?",
                [
                    "Probability Density Function",
                    "Portable Document Format",
                    "Both",
                    "Neither",
                ],
                0,
            ),
            (
                "What is regression analysis used for?",
                [
                    "Classification",
                    "Predicting continuous values",
                    "Clustering",
                    "Dimensionality reduction",
                ],
                1,
            ),
            (
                "Which plot is best for categorical data?",
                ["Scatter plot", "Bar chart", "Line chart", "Histogram"],
                1,
            ),
        ],
    },
    CourseTemplate {
        course: Course::AiMl,
        topics: [
            "Linear Algebra",
            "Calculus",
            "Neural Networks",
            "Deep Learning",
            "Algorithms",
        ],
        questions: [
            (
                "What is a gradient in machine learning?",
                [
                    "Slope of a function",
                    "Type of algorithm",
                    "Data structure",
                    "Learning rate",
                ],
                0,
            ),
            (
                "What does ReLU stand for?",
                [
                    "Rectified Linear Unit",
                    "Real Learning Update",
                    "Regression Linear Unit",
                    "Random Learning Update",
                ],
                0,
            ),
            (
                "What is overfitting?",
                [
                    "Model too simple",
                    "Model too complex",
                    "Perfect fit",
                    "Underperformance",
                ],
                1,
            ),
            (
                "What is backpropagation used for?",
                [
                    "Data preprocessing",
                    "Training neural networks",
                    "Feature selection",
                    "Model evaluation",
                ],
                1,
            ),
            (
                "What is a tensor?",
                [
                    "Multi-dimensional array",
                    "Single value",
                    "2D array only",
                    "Database table",
                ],
                0,
            ),
        ],
    },
    CourseTemplate {
        course: Course::Cybersecurity,
        topics: [
            "Network Security",
            "Cryptography",
            "Ethical Hacking",
            "OS Security",
            "Web Security",
        ],
        questions: [
            (
                "What is a firewall used for?",
                [
                    "Network security",
                    "Data backup",
                    "Speed optimization",
                    "Memory management",
                ],
                0,
            ),
            (
                "What is encryption?",
                [
                    "Data scrambling",
                    "Data compression",
                    "Data deletion",
                    "Data copying",
                ],
                0,
            ),
            (
                "What is phishing?",
                [
                    "Social engineering attack",
                    "Virus type",
                    "Firewall technique",
                    "Encryption method",
                ],
                0,
            ),
            (
                "What is two-factor authentication?",
                [
                    "Security verification",
                    "Data encryption",
                    "Network protocol",
                    "Backup method",
                ],
                0,
            ),
            (
                "What is a VPN?",
                [
                    "Virtual Private Network",
                    "Visual Programming Network",
                    "Very Protected Network",
                    "Virtual Protocol Network",
                ],
                0,
            ),
        ],
    },
    CourseTemplate {
        course: Course::FullStack,
        topics: ["HTML/CSS", "JavaScript", "React", "Node.js", "Databases"],
        questions: [
            (
                "What does HTML stand for?",
                [
                    "HyperText Markup Language",
                    "HighTech Modern Language",
                    "Hyper Transfer Markup Language",
                    "HighText Machine Language",
                ],
                0,
            ),
            (
                "What is CSS used for?",
                [
                    "Styling web pages",
                    "Adding interactivity",
                    "Database management",
                    "Server operations",
                ],
                0,
            ),
            (
                "What is JavaScript primarily used for?",
                [
                    "Client-side scripting",
                    "Database management",
                    "Server configuration",
                    "Graphic design",
                ],
                0,
            ),
            (
                "What is React?",
                [
                    "Frontend framework",
                    "Backend framework",
                    "Database",
                    "Programming language",
                ],
                0,
            ),
            (
                "What is Node.js?",
                [
                    "JavaScript runtime",
                    "Database system",
                    "CSS framework",
                    "Markup language",
                ],
                0,
            ),
        ],
    },
];

/// Every sample question for every course.
pub fn sample_questions() -> Vec<Question> {
    TEMPLATES.iter().flat_map(course_questions).collect()
}

fn course_questions(template: &CourseTemplate) -> Vec<Question> {
    let label = template.course.label();
    let prefix: String = label.chars().take(2).collect::<String>().to_lowercase();
    (0..QUESTIONS_PER_COURSE)
        .map(|i| {
            let (prompt, options, correct_option) = template.questions[i % 5];
            Question {
                id: format!("{prefix}_{}", i + 1),
                course: label.to_string(),
                topic: template.topics[i % 5].to_string(),
                level: Level::ALL[i % 5],
                prompt: prompt.to_string(),
                options: options.map(String::from),
                correct_option,
            }
        })
        .collect()
}
