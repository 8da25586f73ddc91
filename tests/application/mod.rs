mod artifact_generator_test;
mod completion_text_test;
mod reply_service_test;
