//! Input fields the prediction form declares.

pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
}

impl FormField {
    const fn declared(name: &'static str, label: &'static str, hint: &'static str) -> Self {
        Self {
            name,
            label,
            hint,
            value: String::new(),
        }
    }
}

pub fn default_fields() -> Vec<FormField> {
    vec![
        FormField::declared("age", "Age (years)", "e.g. 48"),
        FormField::declared("bp", "Blood Pressure (mm/Hg)", "e.g. 80"),
        FormField::declared("sg", "Specific Gravity", "e.g. 1.020"),
        FormField::declared("al", "Albumin", "0-5"),
        FormField::declared("su", "Sugar", "0-5"),
        FormField::declared("bgr", "Blood Glucose Random (mgs/dl)", "e.g. 121"),
        FormField::declared("sc", "Serum Creatinine (mgs/dl)", "e.g. 1.2"),
        FormField::declared("hemo", "Hemoglobin (gms)", "e.g. 15.4"),
    ]
}
