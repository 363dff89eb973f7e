//! Built-in sample programs, one per language

use crate::frontend::core::lexer::Language;

const JAVA_SAMPLE: &str = r#"// Inventory summary
import java.util.List;

public class Inventory {
    private static final int LIMIT = 100;
    private double total = 0.0;

    public int restock(int count, int price) {
        int cost = count * price + 5;
        if (cost > LIMIT) {
            cost = LIMIT;
        }
        total = total + cost;
        return cost;
    }

    public boolean isEmpty(List<String> items) {
        boolean empty = true;
        char grade = 'A';
        String label = "stock";
        if (items != null) {
            empty = false;
        }
        return empty;
    }
}
"#;

const CPP_SAMPLE: &str = r#"#include <iostream>
#include <vector>

/* Running totals */
struct Counter {
    long hits = 0L;
};

int scale(int value, int factor) {
    int result = value * factor - 1;
    if (result >= 0x40) {
        result = result / 2;
    }
    return result;
}

int main() {
    std::vector<int> samples;
    float ratio = 0.75f;
    bool ready = true;
    int total = scale(3, 4);
    if (ready) {
        total = total + 1;
    }
    std::cout << "total: " << total << std::endl;
    return 0;
}
"#;

/// Sample program for `language`
pub fn sample_code(language: Language) -> &'static str {
    match language {
        Language::Java => JAVA_SAMPLE,
        Language::Cpp => CPP_SAMPLE,
    }
}
