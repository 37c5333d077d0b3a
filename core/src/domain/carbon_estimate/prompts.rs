const OUTPUT_CONTRACT: &str = "Return STRICT JSON with keys: dish (string), \
estimated_carbon_kg (number), ingredients (array of {name, carbon_kg}).";

pub fn build_text_instruction(dish: &str) -> String {
    format!(
        "You are a sustainability assistant. Given a dish name, infer 3-8 likely ingredients \
         and estimate their carbon footprint in kg CO2e each. {OUTPUT_CONTRACT} \
         Use reasonable, order-of-magnitude values. Do not include any extra commentary.\n\n\
         Dish: {dish}"
    )
}

pub fn build_image_instruction() -> String {
    format!(
        "You are a vision sustainability assistant. Analyze the attached image to identify \
         the food dish or its main ingredients, then estimate their carbon footprint in kg CO2e \
         each. {OUTPUT_CONTRACT} Do not include any extra commentary."
    )
}
