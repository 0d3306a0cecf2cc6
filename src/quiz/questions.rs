use crate::career::CareerCategory;

#[derive(Debug)]
pub struct QuizOption {
    pub key: &'static str,
    pub label: &'static str,
    pub category: CareerCategory,
}

#[derive(Debug)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub options: &'static [QuizOption],
}

impl Question {
    pub fn option(&self, key: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.key == key)
    }
}

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

macro_rules! opt {
    ($key:literal, $label:literal, $category:ident) => {
        QuizOption {
            key: $key,
            label: $label,
            category: CareerCategory::$category,
        }
    };
}

/// Career quiz, in presentation order
pub static QUESTIONS: &[Question] = &[
    Question {
        id: "q1",
        text: "Quando você pensa em trabalho, o que mais te anima?",
        options: &[
            opt!("q1_software", "Construir sistemas e automatizar coisas", Software),
            opt!("q1_ux", "Criar interfaces bonitas e intuitivas", UxDesign),
            opt!("q1_data", "Mexer com números, gráficos e dados", DataScience),
            opt!("q1_gestao", "Organizar equipes, prazos e entregas", ProjectManagement),
        ],
    },
    Question {
        id: "q2",
        text: "Qual atividade você preferiria fazer por duas horas seguidas?",
        options: &[
            opt!("q2_software", "Programar um recurso novo em um app", Software),
            opt!("q2_ux", "Desenhar protótipos de tela", UxDesign),
            opt!("q2_data", "Explorar dados e buscar padrões", DataScience),
            opt!("q2_gestao", "Planejar tarefas de um projeto", ProjectManagement),
        ],
    },
    Question {
        id: "q3",
        text: "Qual dessas frases parece mais com você?",
        options: &[
            opt!("q3_software", "Gosto de entender como as coisas funcionam por dentro", Software),
            opt!("q3_ux", "Gosto de tornar algo mais agradável de usar", UxDesign),
            opt!("q3_data", "Gosto de descobrir o porquê das coisas com dados", DataScience),
            opt!("q3_gestao", "Gosto de coordenar pessoas e decisões", ProjectManagement),
        ],
    },
    Question {
        id: "q4",
        text: "Se tivesse que escolher um curso agora, qual escolheria primeiro?",
        options: &[
            opt!("q4_software", "Desenvolvimento de APIs / Programação", Software),
            opt!("q4_ux", "Design de interface / Figma", UxDesign),
            opt!("q4_data", "Análise de dados / Machine Learning", DataScience),
            opt!("q4_gestao", "Gestão Ágil / Liderança", ProjectManagement),
        ],
    },
    Question {
        id: "q5",
        text: "Em um trabalho em grupo, qual papel você assume naturalmente?",
        options: &[
            opt!("q5_software", "Quem implementa e resolve bugs", Software),
            opt!("q5_ux", "Quem cuida da parte visual e da experiência", UxDesign),
            opt!("q5_data", "Quem analisa resultados e métricas", DataScience),
            opt!("q5_gestao", "Quem organiza as entregas e prazos", ProjectManagement),
        ],
    },
    Question {
        id: "q6",
        text: "O que é mais prazeroso para você?",
        options: &[
            opt!("q6_software", "Resolver um problema complexo com lógica", Software),
            opt!("q6_ux", "Criar algo visual que as pessoas gostem de usar", UxDesign),
            opt!("q6_data", "Descobrir um insight interessante em dados", DataScience),
            opt!("q6_gestao", "Ver um plano dar certo com a equipe", ProjectManagement),
        ],
    },
    Question {
        id: "q7",
        text: "Qual dessas ferramentas você teria mais vontade de aprender primeiro?",
        options: &[
            opt!("q7_software", "Node.js, Java, GitHub", Software),
            opt!("q7_ux", "Figma, Design System", UxDesign),
            opt!("q7_data", "SQL, Power BI, Pandas", DataScience),
            opt!("q7_gestao", "Notion, Jira, Kanban", ProjectManagement),
        ],
    },
    Question {
        id: "q8",
        text: "Como você costuma tomar decisões no trabalho ou estudo?",
        options: &[
            opt!("q8_software", "Testo, erro, ajusto e tento de novo", Software),
            opt!("q8_ux", "Faço rascunhos e comparo ideias visuais", UxDesign),
            opt!("q8_data", "Busco dados antes de decidir", DataScience),
            opt!("q8_gestao", "Converso com as pessoas e defino prioridades", ProjectManagement),
        ],
    },
];
