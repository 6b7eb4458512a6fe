mod reinit_keeps_existing_history;
