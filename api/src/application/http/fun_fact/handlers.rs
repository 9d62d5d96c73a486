pub mod get_fun_fact;
