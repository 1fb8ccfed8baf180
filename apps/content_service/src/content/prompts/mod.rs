pub mod hotels_in_city_prompt;
