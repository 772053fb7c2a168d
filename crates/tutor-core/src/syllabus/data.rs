//! Static K-12 syllabus: grade -> subject -> ordered topics.

use super::{GradeSyllabus, SubjectTopics};

pub(super) static SYLLABUS: &[GradeSyllabus] = &[
  GradeSyllabus {
    grade:    "K",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Counting Numbers 1-20",
          "Basic Shapes",
          "Patterns and Sorting",
          "Simple Addition",
          "Simple Subtraction",
          "Measurement Basics",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Five Senses",
          "Animals and Their Habitats",
          "Plants and Their Parts",
          "Weather and Seasons",
          "Day and Night",
          "Living vs Non-Living Things",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Alphabet Recognition",
          "Letter Sounds",
          "Simple Words",
          "Rhyming Words",
          "Basic Sentence Structure",
          "Listening Skills",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "1",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Numbers up to 100",
          "Addition and Subtraction",
          "Place Value",
          "Measurement - Length and Weight",
          "Time - Hours and Minutes",
          "Basic Geometry - 2D Shapes",
          "Money - Coins and Notes",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Animals - Classification",
          "Plants - Life Cycle",
          "Human Body - Parts and Functions",
          "Matter - Solid, Liquid, Gas",
          "Simple Machines",
          "Earth and Sky",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Reading Simple Stories",
          "Writing Simple Sentences",
          "Nouns and Verbs",
          "Capital Letters and Punctuation",
          "Vocabulary Building",
          "Comprehension Skills",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "2",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Numbers up to 1000",
          "Addition and Subtraction of 3-digit Numbers",
          "Introduction to Multiplication",
          "Introduction to Division",
          "Fractions - Halves and Quarters",
          "Measurement - Area and Perimeter",
          "Data Handling - Pictographs",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Food and Nutrition",
          "Water Cycle",
          "Air and Wind",
          "Light and Shadow",
          "Sound and Hearing",
          "Magnets",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Reading Comprehension",
          "Creative Writing",
          "Parts of Speech",
          "Adjectives and Adverbs",
          "Sentence Types",
          "Vocabulary and Spelling",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "3",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Numbers up to 10000",
          "Multiplication Tables",
          "Division with Remainders",
          "Fractions - Addition and Subtraction",
          "Decimals - Introduction",
          "Time - 24-hour Clock",
          "Geometry - 3D Shapes",
          "Data Handling - Bar Graphs",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "States of Matter",
          "Energy - Forms and Sources",
          "Force and Motion",
          "Ecosystems",
          "Solar System",
          "Human Digestive System",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Reading Different Text Types",
          "Paragraph Writing",
          "Grammar - Tenses",
          "Pronouns and Prepositions",
          "Figurative Language",
          "Speaking and Presentation Skills",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "4",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Large Numbers - Millions",
          "Factors and Multiples",
          "Fractions - Multiplication and Division",
          "Decimals - Operations",
          "Angles and Triangles",
          "Symmetry",
          "Perimeter and Area",
          "Data Interpretation",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Cell Structure",
          "Photosynthesis",
          "Electricity - Circuits",
          "Heat and Temperature",
          "Rocks and Minerals",
          "Climate and Weather Patterns",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Essay Writing",
          "Active and Passive Voice",
          "Complex Sentences",
          "Conjunctions",
          "Poetry Analysis",
          "Comprehension Strategies",
        ],
      },
      SubjectTopics {
        subject: "History",
        topics:  &[
          "Ancient Civilizations",
          "Early Explorers",
          "World Geography Basics",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "5",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Number Systems - Integers",
          "Prime Numbers and Factorization",
          "Fractions to Decimals Conversion",
          "Percentages - Introduction",
          "Ratio and Proportion",
          "Algebraic Expressions - Basics",
          "Quadrilaterals",
          "Volume and Capacity",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Human Respiratory System",
          "Reproduction in Plants",
          "Chemical Reactions - Introduction",
          "Forces - Gravity and Friction",
          "Simple Machines - Work and Energy",
          "Earth's Layers",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Persuasive Writing",
          "Direct and Indirect Speech",
          "Clauses and Phrases",
          "Literary Devices",
          "Debate and Discussion",
          "Research Skills",
        ],
      },
      SubjectTopics {
        subject: "History",
        topics:  &[
          "Medieval History",
          "Renaissance and Reformation",
          "Map Reading Skills",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "6",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Negative Numbers",
          "Operations with Integers",
          "Algebraic Equations - Solving",
          "Percentages - Applications",
          "Understanding Geometry - Angles",
          "Circles - Area and Circumference",
          "Statistics - Mean, Median, Mode",
          "Probability - Introduction",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Human Circulatory System",
          "Nutrition and Digestion",
          "Acids, Bases and Salts",
          "Electricity and Magnetism",
          "Motion and Speed",
          "Environmental Conservation",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Argumentative Writing",
          "Grammar - Advanced Tenses",
          "Vocabulary - Context Clues",
          "Reading Analysis",
          "Public Speaking",
          "Creative Writing - Stories",
        ],
      },
      SubjectTopics {
        subject: "History",
        topics:  &[
          "Age of Exploration",
          "Colonial America",
          "World Cultures and Geography",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "7",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Rational Numbers",
          "Exponents and Powers",
          "Linear Equations",
          "Congruence of Triangles",
          "Coordinate Geometry - Introduction",
          "Perimeter and Area - Complex Shapes",
          "Data Handling - Probability",
          "Algebraic Identities",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Nutrition in Animals",
          "Reproduction in Animals",
          "Chemical Equations",
          "Physical and Chemical Changes",
          "Weather, Climate and Adaptations",
          "Soil - Types and Conservation",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Analytical Essays",
          "Advanced Grammar - Conditionals",
          "Literary Analysis",
          "Comprehension - Inference",
          "Formal Writing",
          "Media Literacy",
        ],
      },
      SubjectTopics {
        subject: "History",
        topics:  &[
          "American Revolution",
          "Constitution and Government",
          "Geography - Natural Resources",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "8",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Rational and Irrational Numbers",
          "Squares and Square Roots",
          "Cube and Cube Roots",
          "Linear Equations in Two Variables",
          "Quadrilaterals - Properties",
          "Mensuration - Surface Area and Volume",
          "Statistics - Data Representation",
          "Introduction to Graphs",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Microorganisms",
          "Cell - Structure and Functions",
          "Metals and Non-metals",
          "Force and Pressure",
          "Friction",
          "Sound - Propagation and Properties",
          "Pollution and Conservation",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Research Papers",
          "Complex Grammar Structures",
          "Critical Analysis",
          "Rhetoric and Persuasion",
          "Advanced Vocabulary",
          "Comparative Literature",
        ],
      },
      SubjectTopics {
        subject: "History",
        topics:  &[
          "Civil War Era",
          "Industrial Revolution",
          "Geography - Climate Zones",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "9",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Real Numbers",
          "Polynomials",
          "Linear Equations in Two Variables - Graphing",
          "Coordinate Geometry",
          "Euclid's Geometry",
          "Triangles - Similarity",
          "Quadrilaterals - Advanced",
          "Areas - Parallelograms and Triangles",
          "Circles - Properties",
          "Statistics - Mean, Median, Mode",
          "Probability - Events",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Motion - Equations",
          "Force and Newton's Laws",
          "Gravitation",
          "Work and Energy",
          "Sound - Detailed Study",
          "Atomic Structure",
          "Classification of Matter",
          "Cell - Advanced Study",
          "Tissues in Animals and Plants",
          "Natural Resources",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Literary Criticism",
          "Advanced Composition",
          "Shakespeare Studies",
          "World Literature",
          "Debate and Argumentation",
          "Technical Writing",
        ],
      },
      SubjectTopics {
        subject: "History",
        topics:  &[
          "World War I",
          "Great Depression",
          "World Geography - Political Systems",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "10",
    subjects: &[
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Letter to God",
          "Dust of Snow",
          "Fire and Ice",
          "A Triumph of Surgery",
          "Nelson Mandela",
          "Tiger in Zoo",
          "Two Stories About Flying - His First Flight",
          "Two Stories About Flying - The Black Aeroplane",
          "How to Tell Wild Animals",
          "The Thief's Story",
          "Midnight Visitor",
          "Diary of Anne Frank",
          "Ball Poem",
          "Glimpses of India",
          "A Question of Trust",
          "Amanda",
          "Mij the Otter",
          "Making of a Scientist",
          "Trees",
          "Footprints Without Feet",
          "Madam Rides the Bus",
          "Sermon at Benares",
          "Fog",
          "The Necklace",
          "Bholi",
          "The Proposal",
          "Tale of Custard Dragon",
          "For Anne Gregory",
          "The Book That Saved the Earth",
          "Letter Writing - Formal and Informal",
          "Tenses and Modals",
          "Reported Speech",
          "Determiners",
          "Subject Verb Agreement",
          "Integrated Grammar",
          "Analytical Paragraph",
        ],
      },
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Real Numbers",
          "Polynomials",
          "Pair of Linear Equations in Two Variables",
          "Triangles",
          "Quadratic Equations",
          "Arithmetic Progression",
          "Coordinate Geometry",
          "Introduction to Trigonometry",
          "Some Applications of Trigonometry",
          "Circles",
          "Areas Related to Circles",
          "Surface Area and Volume",
          "Statistics",
          "Probability",
        ],
      },
      SubjectTopics {
        subject: "Hindi",
        topics:  &[
          "व्याकरण - अलंकार",
          "व्याकरण - पद परिचय",
          "पद्य खण्ड - सूरदास",
          "पद्य खण्ड - तुलसीदास",
          "गद्य खण्ड - नेताजी का चश्मा",
          "गद्य खण्ड - बालगोबिन भगत",
          "पद्य खण्ड - जयशंकर प्रसाद",
          "गद्य खण्ड - लखनवी अंदाज़",
          "कृतिका - माता का अँचल",
          "गद्य खण्ड - उत्साह और अट नहीं रही है",
          "गद्य खण्ड - एक कहानी यह भी",
          "व्याकरण - विज्ञापन लेखन",
          "व्याकरण - पत्र लेखन - औपचारिक और अनौपचारिक",
          "व्याकरण - वाच्य",
          "व्याकरण - वाक्य भेद",
          "पद्य खण्ड - यह दंतुरित मुस्कान",
          "व्याकरण - निबंध लेखन",
          "पद्य खण्ड - संगतकार",
          "गद्य खण्ड - नौबतखाने में इबादत",
          "कृतिका - साना साना हाथ जोड़ि",
          "कृतिका - मैं क्यों लिखता हूँ?",
          "गद्य खण्ड - संस्कृति",
          "व्याकरण - स्ववृत्त लेखन और ई मेल लेखन",
          "व्याकरण - अपठित गद्यांश और पद्यांश",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Electricity",
          "Life Processes",
          "Chemical Reactions and Equations",
          "Control and Coordination",
          "Magnetic Effect of Electric Current",
          "Light - Reflection and Refraction",
          "Metals and Non-Metals",
          "Human Eye and Colourful World",
          "Acid, Base and Salt",
          "How Do Organisms Reproduce",
          "Heredity and Evolution",
          "Carbon and Its Compounds",
          "Our Environment",
        ],
      },
      SubjectTopics {
        subject: "Social Science",
        topics:  &[
          "Power Sharing",
          "Development",
          "Federalism",
          "The Rise of Nationalism in Europe",
          "Forest and Wildlife Resources",
          "Sector of the Indian Economy",
          "Resource and Development",
          "Gender, Religion and Caste",
          "Nationalism in India",
          "Water Resources",
          "Agriculture",
          "Manufacturing Industries",
          "Political Parties",
          "Money and Credit",
          "The Making of a Global World",
          "Print Culture and the Modern World",
          "Minerals and Energy Resources",
          "Outcomes of Democracy",
          "Life Lines of National Economy",
          "Globalisation and the Indian Economy",
        ],
      },
      SubjectTopics {
        subject: "Sanskrit",
        topics:  &[
          "प्रथम पाठ - शुचिपर्यावरणम्",
          "स्वरसन्धि",
          "द्वितीय पाठ - बुद्धिर्बलवती सदा",
          "व्यञ्जनसन्धि - परसवर्ण, अनुस्वार, जश्त्व, अनुनासिक",
          "विसर्गसन्धि - उत्व, रत्व, सत्व",
          "रचनात्मक कार्य - चित्रधारितवाक्यानि",
          "तृतीय पाठ - शिशुलालनम्",
          "षष्ठ पाठ - सौहार्द प्रकृते शोभा",
          "उपसर्ग",
          "सप्तम पाठ - विचित्र साक्षी",
          "प्रत्यय - मतुप्, त्वा, तल्",
          "अष्टम पाठ - सूक्तय",
          "नवम पाठ - भूकम्पविभीषिका",
          "एकं, इन्, डीप् प्रत्यय",
          "दशम पाठ - अन्योक्तय",
          "अव्यय पदानि",
          "पुरुष-लकार दृष्ट्या संशोधनम्",
          "वचन-लिङ्ग दृष्ट्या संशोधनम्",
          "पत्रपाठनम्",
          "गद्यांश",
          "श्लोक वाचन",
          "सुभाषित कण्ठस्थीकरणम्",
        ],
      },
      SubjectTopics {
        subject: "AI",
        topics:  &[
          "Introduction to AI - What is Intelligence",
          "AI Basics - Decision Making",
          "AI and Related Terminologies",
          "Explore AI, ML & DL",
          "AI Domains and Applications",
          "Real-life AI Implementations",
          "Ethics in AI - Bias and Data Privacy",
          "AI Project Cycle - Introduction",
          "Problem Scoping",
          "Sustainable Development Goals",
          "Data Acquisition",
          "Data Exploration and Visualization",
          "AI Modelling - Introduction",
          "Machine Learning Algorithms",
          "Teachable Machine",
          "Evaluation - Metrics and Techniques",
          "Python Basics - Jupyter Notebook",
          "Advanced Python Concepts",
          "Data Science - Introduction",
          "Data Collection and Access",
          "Python for Data Science - NumPy, Pandas, Matplotlib",
          "Statistical Learning",
          "Computer Vision - Introduction",
          "Image Processing with OpenCV",
          "Feature Extraction and Object Detection",
          "Natural Language Processing - Introduction",
          "Text Normalization and Bag-of-Words",
          "Chatbots and NLP Applications",
          "Confusion Matrix",
          "Model Evaluation Terminologies",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "11",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Sets and Relations",
          "Trigonometric Functions",
          "Complex Numbers",
          "Linear Inequalities",
          "Permutations and Combinations",
          "Binomial Theorem",
          "Sequences and Series",
          "Straight Lines",
          "Conic Sections",
          "Limits and Derivatives",
          "Mathematical Reasoning",
          "Statistics - Measures of Dispersion",
          "Probability - Conditional",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Physical World and Measurement",
          "Kinematics",
          "Laws of Motion - Detailed",
          "Work, Energy and Power",
          "Rotational Motion",
          "Gravitation - Universal Law",
          "Thermodynamics",
          "Organic Chemistry - Basics",
          "Hydrocarbons",
          "Environmental Chemistry",
          "Cell Structure and Function",
          "Plant Physiology",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Advanced Literature",
          "Critical Theory",
          "Research Methodology",
          "Academic Writing",
          "Linguistics",
          "Comparative Studies",
        ],
      },
      SubjectTopics {
        subject: "History",
        topics:  &[
          "Modern World History - Post WWII",
          "Globalization",
          "Contemporary Issues",
        ],
      },
    ],
  },
  GradeSyllabus {
    grade:    "12",
    subjects: &[
      SubjectTopics {
        subject: "Mathematics",
        topics:  &[
          "Relations and Functions - Advanced",
          "Inverse Trigonometric Functions",
          "Matrices and Determinants",
          "Continuity and Differentiability",
          "Applications of Derivatives",
          "Integrals",
          "Applications of Integrals",
          "Differential Equations",
          "Vector Algebra",
          "Three Dimensional Geometry",
          "Linear Programming",
          "Probability - Advanced",
        ],
      },
      SubjectTopics {
        subject: "Science",
        topics:  &[
          "Electric Charges and Fields",
          "Electrostatic Potential",
          "Current Electricity - Advanced",
          "Magnetism",
          "Electromagnetic Induction",
          "Alternating Current",
          "Electromagnetic Waves",
          "Optics - Advanced",
          "Dual Nature of Matter",
          "Atoms and Nuclei",
          "Semiconductor Electronics",
          "Electrochemistry",
          "Chemical Kinetics",
          "Polymers",
          "Biomolecules",
          "Genetics and Evolution",
          "Human Reproduction",
          "Biotechnology",
        ],
      },
      SubjectTopics {
        subject: "English",
        topics:  &[
          "Advanced Composition",
          "Literary Theory",
          "World Literature - Advanced",
          "Professional Communication",
          "Research and Publication",
          "Specialized Writing",
        ],
      },
      SubjectTopics {
        subject: "History",
        topics:  &[
          "Contemporary World History",
          "Political Science",
          "Economics and Development",
          "International Relations",
        ],
      },
    ],
  },
];
